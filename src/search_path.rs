//! Search path for loadable extension code.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dirs::{UserDirs, locate_user_lisp_path};
use crate::fs::PathExt;

/// Where [`SearchPath::add_directory`] inserts a new entry.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Placement {
    /// Before every existing entry, so it is consulted first.
    #[default]
    Prepend,
    /// After every existing entry.
    Append,
}

/// Errors encountered when extending a [`SearchPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchPathError {
    /// Path is missing, or is not a directory.
    #[error("`{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Ordered list of directories consulted when locating extension code.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Empty search path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries, first consulted first.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Returns `true` if `dir` is already an entry.
    pub fn contains(&self, dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        self.entries.iter().any(|entry| entry == dir)
    }

    /// Insert `dir` without checking the filesystem.
    ///
    /// # Returns
    /// `true` if inserted, `false` if `dir` was already present. An existing entry is never
    /// moved, whatever the `placement`.
    pub fn insert(&mut self, dir: impl Into<PathBuf>, placement: Placement) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            log::trace!("{} already in search path", dir.display());
            return false;
        }
        log::debug!("adding {} to search path ({placement:?})", dir.display());
        match placement {
            Placement::Prepend => self.entries.insert(0, dir),
            Placement::Append => self.entries.push(dir),
        }
        true
    }

    /// Insert `dir` after checking it is an existing directory.
    ///
    /// # Returns
    /// Same as [`SearchPath::insert`], or [`SearchPathError::NotADirectory`], in which case
    /// `self` is left untouched.
    pub fn add_directory(
        &mut self,
        dir: impl AsRef<Path>,
        placement: Placement,
    ) -> Result<bool, SearchPathError> {
        let dir = dir.as_ref();
        if !dir.is_existing_dir() {
            return Err(SearchPathError::NotADirectory(dir.to_path_buf()));
        }
        Ok(self.insert(dir, placement))
    }
}

impl<'a> IntoIterator for &'a SearchPath {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Add an existing directory to `search_path`. See [`SearchPath::add_directory`].
pub fn add_directory_to_search_path(
    search_path: &mut SearchPath,
    directory: impl AsRef<Path>,
    placement: Placement,
) -> Result<bool, SearchPathError> {
    search_path.add_directory(directory, placement)
}

/// Add `subdirectory` of the user lisp directory to `search_path`.
pub fn add_user_lisp_to_search_path(
    dirs: &UserDirs,
    search_path: &mut SearchPath,
    subdirectory: impl AsRef<Path>,
    placement: Placement,
) -> Result<bool, SearchPathError> {
    let directory = locate_user_lisp_path(dirs, subdirectory);
    add_directory_to_search_path(search_path, directory, placement)
}
