//! Userdirs - XDG-style user directories for editor configuration.
//!
//! Resolves the configuration, data, cache, lisp and documents directories once at startup,
//! locates files within them, and maintains the search path for extension code.

pub mod context;
pub mod dirs;
pub mod fs;
pub mod os;
pub mod search_path;

pub use context::Context;
pub use dirs::{Category, InvalidCategoryError, UserDirs};
pub use search_path::{Placement, SearchPath, SearchPathError};
