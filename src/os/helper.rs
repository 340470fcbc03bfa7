//! External helper programs.
//!
//! The documents directory is not covered by `$XDG_*_HOME` variables, so it is looked up through
//! `xdg-user-dir`. The lookup sits behind [`DocumentsLookup`] so it can be replaced without
//! spawning a process.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

mod sealed {
    use std::process::Command;
    pub trait Sealed {}
    impl Sealed for Command {}
}

/// Adds [`stdout_line`](CommandExt::stdout_line) to the [`Command`].
pub trait CommandExt: sealed::Sealed {
    /// Run the command to completion and return its standard output without trailing line
    /// terminators.
    ///
    /// # Returns
    /// [`Err`](io::Error) if spawning failed. [`Ok(None)`](None) if the command exited with a
    /// non-zero status. Outside unix, output that is not UTF-8 is also [`None`].
    fn stdout_line(&mut self) -> io::Result<Option<OsString>>;
}

impl CommandExt for Command {
    fn stdout_line(&mut self) -> io::Result<Option<OsString>> {
        let output = self
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        if !output.status.success() {
            return Ok(None);
        }
        let mut stdout = output.stdout;
        while matches!(stdout.last(), Some(b'\n' | b'\r')) {
            stdout.pop();
        }
        Ok(os_string_from_bytes(stdout))
    }
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Some(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
    String::from_utf8(bytes).ok().map(OsString::from)
}

/// Source of the user's documents directory.
pub trait DocumentsLookup {
    /// Resolve the documents directory, or [`None`] if it cannot be determined.
    fn resolve(&self) -> Option<PathBuf>;
}

impl<F> DocumentsLookup for F
where
    F: Fn() -> Option<PathBuf>,
{
    fn resolve(&self) -> Option<PathBuf> {
        self()
    }
}

/// [`DocumentsLookup`] which runs an external program and takes its output as the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl HelperCommand {
    /// Program queried by [`HelperCommand::default`].
    pub const XDG_USER_DIR: &'static str = "xdg-user-dir";

    /// Run `program` with no arguments.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl Default for HelperCommand {
    /// `xdg-user-dir DOCUMENTS`.
    fn default() -> Self {
        Self::new(Self::XDG_USER_DIR).arg("DOCUMENTS")
    }
}

impl DocumentsLookup for HelperCommand {
    fn resolve(&self) -> Option<PathBuf> {
        self.command()
            .stdout_line()
            .ok()
            .flatten()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
    }
}
