use std::path::{Path, PathBuf};

use shellexpand::tilde_with_context;

mod sealed {
    use std::path::Path;

    pub trait Sealed {}
    impl Sealed for Path {}
}

/// Extension trait for [`Path`] with the path handling user directories need.
///
/// ```rust
/// # use userdirs::fs::PathExt;
/// # use std::path::{Path, PathBuf};
/// let home = PathBuf::from("/home/u");
/// let expanded = Path::new("~/.config").expand_user(Some(home.as_path()));
/// assert_eq!(expanded, Path::new("/home/u/.config"));
/// ```
pub trait PathExt: sealed::Sealed {
    /// Expand a leading `~` against `home`, then make the result absolute.
    ///
    /// If `home` is [`None`], `~` is left as is. Relative results
    /// are resolved against the current working directory with [`std::path::absolute`], which
    /// never touches the filesystem.
    fn expand_user(&self, home: Option<&Path>) -> PathBuf;

    /// Returns `true` if path exists on a disk and is a directory, following symlinks.
    fn is_existing_dir(&self) -> bool;
}

impl PathExt for Path {
    fn expand_user(&self, home: Option<&Path>) -> PathBuf {
        let expanded = match (self.to_str(), home.and_then(Path::to_str)) {
            (Some(as_str), Some(home)) => {
                PathBuf::from(tilde_with_context(as_str, || Some(home)).into_owned())
            }
            // `shellexpand` only takes UTF-8, so join non-UTF-8 paths by components.
            _ => match (self.strip_prefix("~"), home) {
                (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home.to_path_buf(),
                (Ok(rest), Some(home)) => home.join(rest),
                _ => self.to_path_buf(),
            },
        };
        std::path::absolute(&expanded).unwrap_or(expanded)
    }

    fn is_existing_dir(&self) -> bool {
        self.metadata()
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false)
    }
}
