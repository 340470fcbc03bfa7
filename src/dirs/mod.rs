//! User directories and helpers to locate files within them.
//!
//! ```rust,no_run
//! # use userdirs::dirs::{Category, UserDirs, locate_user_file};
//! # use userdirs::os::env::Env;
//! # use userdirs::os::helper::HelperCommand;
//! let dirs = UserDirs::builder().resolve(&Env::new(), &HelperCommand::default());
//!
//! let init = locate_user_file(&dirs, "init.el", Category::Config);
//! let bookmarks = locate_user_file(&dirs, "bookmarks", Category::default());
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::fs::PathExt;
use crate::os::env::Env;
use crate::os::helper::DocumentsLookup;

pub mod xdg;

use xdg::BaseDir;

/// Application directory appended to every base directory by default.
pub const DEFAULT_APP_NAME: &str = "emacs";

/// Subdirectory of the data directory holding user-installed extension code.
pub const LISP_SUBDIR: &str = "lisp";

/// Kind of user directory a file belongs to.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Category {
    /// Persistent user data.
    #[default]
    Data,
    /// Configuration files.
    Config,
    /// Expendable, regenerable files.
    Cache,
    /// User-installed extension code.
    Lisp,
    /// Personal documents.
    Documents,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Data,
        Category::Config,
        Category::Cache,
        Category::Lisp,
        Category::Documents,
    ];

    /// Lowercase name, as accepted by [`Category::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            Category::Data => "data",
            Category::Config => "config",
            Category::Cache => "cache",
            Category::Lisp => "lisp",
            Category::Documents => "documents",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category name that is none of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user directory category `{0}`, expected one of: data, config, cache, lisp, documents")]
pub struct InvalidCategoryError(pub String);

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| InvalidCategoryError(s.to_owned()))
    }
}

/// Resolved user directories.
///
/// Built once with [`UserDirsBuilder::resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirs {
    config: PathBuf,
    data: PathBuf,
    cache: PathBuf,
    lisp: PathBuf,
    documents: PathBuf,
}

impl UserDirs {
    /// Start resolving directories for [`DEFAULT_APP_NAME`].
    pub fn builder() -> UserDirsBuilder {
        UserDirsBuilder::default()
    }

    /// Configuration directory, `$XDG_CONFIG_HOME/<app>`.
    pub fn config(&self) -> &Path {
        &self.config
    }

    /// Data directory, `$XDG_DATA_HOME/<app>`.
    pub fn data(&self) -> &Path {
        &self.data
    }

    /// Cache directory, `$XDG_CACHE_HOME/<app>`.
    pub fn cache(&self) -> &Path {
        &self.cache
    }

    /// Extension code directory, always `<data>/lisp`.
    pub fn lisp(&self) -> &Path {
        &self.lisp
    }

    /// Documents directory.
    pub fn documents(&self) -> &Path {
        &self.documents
    }

    /// Directory for `category`.
    pub fn get(&self, category: Category) -> &Path {
        match category {
            Category::Data => self.data(),
            Category::Config => self.config(),
            Category::Cache => self.cache(),
            Category::Lisp => self.lisp(),
            Category::Documents => self.documents(),
        }
    }

    /// All directories paired with their category.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &Path)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }
}

/// Builder for [`UserDirs`].
///
/// Directories given explicitly are kept as they are (after `~` expansion), everything else is
/// resolved from the environment. The lisp directory cannot be set: it follows the data
/// directory.
#[derive(Debug, Clone)]
pub struct UserDirsBuilder {
    app_name: PathBuf,
    config: Option<PathBuf>,
    data: Option<PathBuf>,
    cache: Option<PathBuf>,
    documents: Option<PathBuf>,
}

impl Default for UserDirsBuilder {
    fn default() -> Self {
        Self {
            app_name: PathBuf::from(DEFAULT_APP_NAME),
            config: None,
            data: None,
            cache: None,
            documents: None,
        }
    }
}

impl UserDirsBuilder {
    /// Directory name appended to each base directory.
    pub fn app_name(mut self, name: impl Into<PathBuf>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Use `dir` as the configuration directory.
    pub fn config(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config = Some(dir.into());
        self
    }

    /// Use `dir` as the data directory.
    pub fn data(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data = Some(dir.into());
        self
    }

    /// Use `dir` as the cache directory.
    pub fn cache(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache = Some(dir.into());
        self
    }

    /// Use `dir` as the documents directory, skipping the lookup.
    pub fn documents(mut self, dir: impl Into<PathBuf>) -> Self {
        self.documents = Some(dir.into());
        self
    }

    /// Resolve every directory that was not set explicitly.
    ///
    /// `lookup` is consulted only if no documents directory was given. If it yields nothing, the
    /// documents directory falls back to `~/Documents`.
    pub fn resolve(self, env: &Env, lookup: &dyn DocumentsLookup) -> UserDirs {
        let UserDirsBuilder {
            app_name,
            config,
            data,
            cache,
            documents,
        } = self;
        let home = env.home();
        let given = |dir: PathBuf| dir.expand_user(home.as_deref());
        let base = |dir: Option<PathBuf>, base: BaseDir| match dir {
            Some(dir) => given(dir),
            None => base.resolve(env, &app_name),
        };

        let config = base(config, BaseDir::Config);
        let data = base(data, BaseDir::Data);
        let cache = base(cache, BaseDir::Cache);
        let lisp = data.join(LISP_SUBDIR);
        let documents = match documents {
            Some(dir) => given(dir),
            None => lookup
                .resolve()
                .map(given)
                .unwrap_or_else(|| xdg::documents_fallback(env)),
        };

        let dirs = UserDirs {
            config,
            data,
            cache,
            lisp,
            documents,
        };
        for (category, dir) in dirs.iter() {
            log::debug!("user {category} directory: {}", dir.display());
        }
        dirs
    }
}

/// Join `filename` onto the directory for `category`.
///
/// This is pure path composition: nothing is checked on disk.
pub fn locate_user_file(
    dirs: &UserDirs,
    filename: impl AsRef<Path>,
    category: Category,
) -> PathBuf {
    dirs.get(category).join(filename)
}

/// [`locate_user_file`] in [`Category::Config`].
pub fn locate_user_config_file(dirs: &UserDirs, filename: impl AsRef<Path>) -> PathBuf {
    locate_user_file(dirs, filename, Category::Config)
}

/// [`locate_user_file`] in [`Category::Lisp`].
pub fn locate_user_lisp_path(dirs: &UserDirs, filename: impl AsRef<Path>) -> PathBuf {
    locate_user_file(dirs, filename, Category::Lisp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn env_of(pairs: &[(&str, &str)]) -> Env {
        Env::new_from(
            pairs
                .iter()
                .map(|(k, v)| (OsString::from(k), OsString::from(v)))
                .collect::<HashMap<_, _>>(),
        )
    }

    fn no_documents() -> Option<PathBuf> {
        None
    }

    fn resolve(env: &Env) -> UserDirs {
        UserDirs::builder().resolve(env, &no_documents)
    }

    #[test]
    fn resolves_from_env() {
        let env = env_of(&[
            ("HOME", "/home/u"),
            ("XDG_CONFIG_HOME", "/xdg/config"),
            ("XDG_DATA_HOME", "/xdg/data"),
            ("XDG_CACHE_HOME", "/xdg/cache"),
        ]);
        let dirs = UserDirs::builder().resolve(&env, &|| Some(PathBuf::from("/srv/docs")));
        assert_eq!(dirs.config(), Path::new("/xdg/config/emacs"));
        assert_eq!(dirs.data(), Path::new("/xdg/data/emacs"));
        assert_eq!(dirs.cache(), Path::new("/xdg/cache/emacs"));
        assert_eq!(dirs.lisp(), Path::new("/xdg/data/emacs/lisp"));
        assert_eq!(dirs.documents(), Path::new("/srv/docs"));
    }

    #[test]
    fn resolves_fallbacks() {
        let dirs = resolve(&env_of(&[("HOME", "/home/u")]));
        assert_eq!(dirs.config(), Path::new("/home/u/.config/emacs"));
        assert_eq!(dirs.data(), Path::new("/home/u/.local/share/emacs"));
        assert_eq!(dirs.cache(), Path::new("/home/u/.cache/emacs"));
        assert_eq!(dirs.lisp(), Path::new("/home/u/.local/share/emacs/lisp"));
        assert_eq!(dirs.documents(), Path::new("/home/u/Documents"));
    }

    #[test]
    fn lisp_follows_data() {
        let env = env_of(&[("HOME", "/home/u"), ("XDG_DATA_HOME", "/xdg/data")]);
        let dirs = UserDirs::builder()
            .data("/opt/data")
            .resolve(&env, &no_documents);
        assert_eq!(dirs.lisp(), Path::new("/opt/data/lisp"));

        let dirs = resolve(&env);
        assert_eq!(dirs.lisp(), dirs.data().join("lisp"));
    }

    #[test]
    fn app_name_is_the_suffix() {
        let env = env_of(&[("HOME", "/home/u")]);
        let dirs = UserDirs::builder()
            .app_name("myeditor")
            .resolve(&env, &no_documents);
        assert_eq!(dirs.config(), Path::new("/home/u/.config/myeditor"));
    }

    #[test]
    fn explicit_dirs_are_kept() {
        let env = env_of(&[("HOME", "/home/u"), ("XDG_CONFIG_HOME", "/xdg/config")]);
        let dirs = UserDirs::builder()
            .config("~/dotfiles/emacs")
            .cache("/tmp/cache")
            .resolve(&env, &no_documents);
        assert_eq!(dirs.config(), Path::new("/home/u/dotfiles/emacs"));
        assert_eq!(dirs.cache(), Path::new("/tmp/cache"));
    }

    #[test]
    fn explicit_documents_skip_lookup() {
        let called = Cell::new(false);
        let lookup = || -> Option<PathBuf> {
            called.set(true);
            None
        };
        let dirs = UserDirs::builder()
            .documents("/srv/docs")
            .resolve(&env_of(&[("HOME", "/home/u")]), &lookup);
        assert!(!called.get());
        assert_eq!(dirs.documents(), Path::new("/srv/docs"));
    }

    #[cfg(unix)]
    #[test]
    fn documents_from_helper_command() {
        use crate::os::helper::HelperCommand;
        let env = env_of(&[("HOME", "/home/u")]);

        let ok = HelperCommand::new("sh")
            .arg("-c")
            .arg("printf '/home/u/Documents\\n'");
        let dirs = UserDirs::builder().resolve(&env, &ok);
        assert_eq!(dirs.documents(), Path::new("/home/u/Documents"));

        let failing = HelperCommand::new("sh").arg("-c").arg("exit 1");
        let dirs = UserDirs::builder().resolve(&env, &failing);
        assert_eq!(dirs.documents(), Path::new("/home/u/Documents"));

        let elsewhere = HelperCommand::new("sh").arg("-c").arg("echo /mnt/docs");
        let dirs = UserDirs::builder().resolve(&env, &elsewhere);
        assert_eq!(dirs.documents(), Path::new("/mnt/docs"));
    }

    #[test]
    fn locate_joins_onto_category() {
        let dirs = resolve(&env_of(&[("HOME", "/home/u")]));
        for category in Category::ALL {
            assert_eq!(
                locate_user_file(&dirs, "foo.txt", category),
                dirs.get(category).join("foo.txt")
            );
        }
        assert_eq!(
            locate_user_file(&dirs, "foo.txt", Category::Config),
            PathBuf::from("/home/u/.config/emacs/foo.txt")
        );
        assert_eq!(
            locate_user_file(&dirs, "bookmarks", Category::default()),
            PathBuf::from("/home/u/.local/share/emacs/bookmarks")
        );
    }

    #[test]
    fn convenience_wrappers() {
        let dirs = resolve(&env_of(&[("HOME", "/home/u")]));
        assert_eq!(
            locate_user_config_file(&dirs, "init.el"),
            PathBuf::from("/home/u/.config/emacs/init.el")
        );
        assert_eq!(
            locate_user_lisp_path(&dirs, "my-mode.el"),
            PathBuf::from("/home/u/.local/share/emacs/lisp/my-mode.el")
        );
    }

    #[test]
    fn category_names_parse() {
        for category in Category::ALL {
            assert_eq!(assert_ok!(category.name().parse::<Category>()), category);
            assert_eq!(category.to_string(), category.name());
        }
    }

    #[test]
    fn bogus_category_is_rejected() {
        let err = assert_err!("bogus-category".parse::<Category>());
        assert_eq!(err, InvalidCategoryError("bogus-category".to_owned()));
        assert!(err.to_string().contains("`bogus-category`"));
        assert_err!("Config".parse::<Category>());
    }
}
