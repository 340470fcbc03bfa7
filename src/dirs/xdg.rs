//! XDG Base Directory Specification support.
//!
//! Each base directory is `$XDG_*_HOME` if set to a non-empty value, otherwise a fixed
//! home-relative fallback. The application directory name is appended afterwards and `~` is
//! expanded against [`Env::home`].

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::fs::PathExt;
use crate::os::env::Env;

/// One of the `$XDG_*_HOME` base directories.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BaseDir {
    /// `$XDG_CONFIG_HOME`, falling back to `~/.config`.
    Config,
    /// `$XDG_DATA_HOME`, falling back to `~/.local/share`.
    Data,
    /// `$XDG_CACHE_HOME`, falling back to `~/.cache`.
    Cache,
}

impl BaseDir {
    /// Name of the environmental variable overriding this directory.
    pub const fn env_var(self) -> &'static str {
        match self {
            BaseDir::Config => "XDG_CONFIG_HOME",
            BaseDir::Data => "XDG_DATA_HOME",
            BaseDir::Cache => "XDG_CACHE_HOME",
        }
    }

    /// Home-relative path used when [`BaseDir::env_var`] is unset or empty.
    pub const fn fallback(self) -> &'static str {
        match self {
            BaseDir::Config => "~/.config",
            BaseDir::Data => "~/.local/share",
            BaseDir::Cache => "~/.cache",
        }
    }

    /// Base directory itself, without any application suffix.
    pub fn home(self, env: &Env) -> PathBuf {
        let raw = env
            .get_os(self.env_var())
            .filter(|value| !value.is_empty())
            .unwrap_or(OsStr::new(self.fallback()));
        Path::new(raw).expand_user(env.home().as_deref())
    }

    /// Application directory `suffix` under this base directory.
    pub fn resolve(self, env: &Env, suffix: impl AsRef<Path>) -> PathBuf {
        let mut dir = self.home(env);
        dir.push(suffix);
        dir
    }
}

/// Fallback for the documents directory when no helper can tell it.
pub const DOCUMENTS_FALLBACK: &str = "~/Documents";

/// Expand [`DOCUMENTS_FALLBACK`] against `env`.
pub fn documents_fallback(env: &Env) -> PathBuf {
    Path::new(DOCUMENTS_FALLBACK).expand_user(env.home().as_deref())
}
