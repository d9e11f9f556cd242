//! # External Process Execution
//!
//! The single seam between this crate and the outside world. Every external
//! command (git, in practice) goes through the [`ProcessRunner`] trait:
//! synchronous, blocking until exit, with the working directory passed
//! explicitly per invocation. The process-wide current directory is never
//! mutated, so invocations from different entries cannot interfere even when
//! entries run on a worker pool.
//!
//! [`SystemRunner`] is the real implementation; tests substitute a scripted
//! double through the trait.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Runs an external executable and blocks until it exits.
pub trait ProcessRunner {
    /// Run `program` with `args`, optionally in working directory `cwd`.
    ///
    /// Output is captured rather than inherited; on a non-zero exit the
    /// child's stderr is returned in [`Error::CommandFailed`].
    fn run(&self, program: &str, args: &[&OsStr], cwd: Option<&Path>) -> Result<()>;
}

/// The real runner, over `std::process::Command`.
///
/// Using the system git binary means SSH keys, credential helpers and
/// anything else configured in `~/.gitconfig` work without this tool knowing
/// about them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&OsStr], cwd: Option<&Path>) -> Result<()> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| Error::CommandSpawn {
            program: program.to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
