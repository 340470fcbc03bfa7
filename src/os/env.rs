use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Snapshot of the process environment, built from [`std::env::vars_os`] or from an explicit
/// map. Lookups are case-insensitive on Windows, as its environmental variables are.
#[derive(Debug, Clone)]
pub struct Env {
    keys: HashMap<OsString, OsString>,

    normalised_keys: HashMap<OsString, OsString>,
}

impl Env {
    /// Capture the current process environment.
    pub fn new() -> Self {
        Self::new_from(std::env::vars_os().collect())
    }

    /// Create new [`Env`] using `env` as existing environmental variables.
    pub fn new_from(env: HashMap<OsString, OsString>) -> Self {
        Self {
            normalised_keys: Env::normalize_map(env.clone()),
            keys: env,
        }
    }

    fn normalize_key(key: impl AsRef<OsStr>) -> OsString {
        key.as_ref().to_ascii_uppercase()
    }

    fn normalize_map(keys: HashMap<OsString, OsString>) -> HashMap<OsString, OsString> {
        keys.into_iter()
            .map(|(key, value)| (Env::normalize_key(key), value))
            .collect()
    }

    /// Get environmental variable pointed by `key`, whatever its encoding.
    ///
    /// Used for `$HOME` and the `$XDG_*_HOME` directories, which may hold any bytes on unix.
    /// Empty values are returned as they are; callers treat them as unset.
    ///
    /// # Examples
    /// ```rust
    /// use userdirs::os::env::Env;
    ///
    /// let env = Env::new();
    /// println!("$FOO = {:?}", env.get_os("FOO"));
    /// ```
    pub fn get_os(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        let key = key.as_ref();
        match self.keys.get(key) {
            Some(x) => Some(x),
            None => {
                if cfg!(target_os = "windows") {
                    self.normalised_keys
                        .get(&Env::normalize_key(key))
                        .map(|x| x.as_ref())
                } else {
                    None
                }
            }
        }
    }

    /// Home directory: `$HOME` when set, otherwise [`std::env::home_dir`].
    pub fn home(&self) -> Option<PathBuf> {
        self.get_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(std::env::home_dir)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
