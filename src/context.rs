//! Startup state shared with configuration code.

use std::path::{Path, PathBuf};

use crate::dirs::{self, Category, UserDirs};
use crate::os::env::Env;
use crate::os::helper::{DocumentsLookup, HelperCommand};
use crate::search_path::{self, Placement, SearchPath, SearchPathError};

/// Resolved [`UserDirs`] together with the extension [`SearchPath`].
///
/// ```rust,no_run
/// # use userdirs::Context;
/// # use userdirs::search_path::Placement;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut ctx = Context::from_process();
/// let init = ctx.locate_user_config_file("init.el");
/// ctx.add_user_lisp_to_search_path("my-package", Placement::Append)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    dirs: UserDirs,
    search_path: SearchPath,
}

impl Context {
    /// Resolve directories with the default builder and seed the search path with the lisp
    /// directory.
    pub fn initialize(env: &Env, lookup: &dyn DocumentsLookup) -> Self {
        Self::with_dirs(UserDirs::builder().resolve(env, lookup))
    }

    /// [`Context::initialize`] against the live environment and `xdg-user-dir`.
    pub fn from_process() -> Self {
        Self::initialize(&Env::new(), &HelperCommand::default())
    }

    /// Wrap already resolved directories.
    ///
    /// The lisp directory goes first in the search path even if it does not exist yet.
    pub fn with_dirs(dirs: UserDirs) -> Self {
        let mut search_path = SearchPath::new();
        search_path.insert(dirs.lisp(), Placement::Prepend);
        Self { dirs, search_path }
    }

    /// Directories resolved at startup.
    pub fn dirs(&self) -> &UserDirs {
        &self.dirs
    }

    /// Current extension search path.
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// See [`dirs::locate_user_file`].
    pub fn locate_user_file(&self, filename: impl AsRef<Path>, category: Category) -> PathBuf {
        dirs::locate_user_file(&self.dirs, filename, category)
    }

    /// See [`dirs::locate_user_config_file`].
    pub fn locate_user_config_file(&self, filename: impl AsRef<Path>) -> PathBuf {
        dirs::locate_user_config_file(&self.dirs, filename)
    }

    /// See [`dirs::locate_user_lisp_path`].
    pub fn locate_user_lisp_path(&self, filename: impl AsRef<Path>) -> PathBuf {
        dirs::locate_user_lisp_path(&self.dirs, filename)
    }

    /// See [`search_path::add_directory_to_search_path`].
    pub fn add_directory_to_search_path(
        &mut self,
        directory: impl AsRef<Path>,
        placement: Placement,
    ) -> Result<bool, SearchPathError> {
        search_path::add_directory_to_search_path(&mut self.search_path, directory, placement)
    }

    /// See [`search_path::add_user_lisp_to_search_path`].
    pub fn add_user_lisp_to_search_path(
        &mut self,
        subdirectory: impl AsRef<Path>,
        placement: Placement,
    ) -> Result<bool, SearchPathError> {
        search_path::add_user_lisp_to_search_path(
            &self.dirs,
            &mut self.search_path,
            subdirectory,
            placement,
        )
    }
}
