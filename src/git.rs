//! # Git Operations
//!
//! Thin wrappers over the [`ProcessRunner`] seam for the two git subcommands
//! this tool needs: `clone <url> <dest>` and `checkout <ref>`. Checkout takes
//! the working copy as an explicit working directory, never by changing the
//! process-wide current directory.
//!
//! Clones are full clones on purpose: the side tree exists to give the user
//! complete history for debugging and bisecting.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{Error, Result};
use crate::process::ProcessRunner;

/// Name of the version-control executable, resolved through `PATH`.
pub const GIT_PROGRAM: &str = "git";

/// Clone `url` into `dest`, blocking until the clone finishes.
pub fn clone(runner: &dyn ProcessRunner, url: &str, dest: &Path) -> Result<()> {
    let args = [OsStr::new("clone"), OsStr::new(url), dest.as_os_str()];

    runner
        .run(GIT_PROGRAM, &args, None)
        .map_err(|err| match err {
            Error::CommandFailed { stderr, .. } => {
                let hint = if stderr.contains("Authentication failed")
                    || stderr.contains("Permission denied")
                    || stderr.contains("Could not read from remote repository")
                {
                    Some(
                        "Make sure you have access to the repository. For private \
                         repos, check that an SSH key is loaded in ssh-agent or git \
                         credentials are configured."
                            .to_string(),
                    )
                } else {
                    None
                };

                Error::GitClone {
                    url: url.to_string(),
                    message: stderr,
                    hint,
                }
            }
            other => other,
        })
}

/// Check out `reference` inside the working copy at `workdir`.
pub fn checkout(runner: &dyn ProcessRunner, workdir: &Path, reference: &str) -> Result<()> {
    let args = [OsStr::new("checkout"), OsStr::new(reference)];

    runner
        .run(GIT_PROGRAM, &args, Some(workdir))
        .map_err(|err| match err {
            Error::CommandFailed { stderr, .. } => Error::GitCheckout {
                reference: reference.to_string(),
                dir: workdir.display().to_string(),
                message: stderr,
            },
            other => other,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::ScriptedRunner;
    use std::path::PathBuf;

    #[test]
    fn test_clone_invocation_shape() {
        let runner = ScriptedRunner::new();
        let dest = PathBuf::from("/tmp/side/widget");

        clone(&runner, "https://github.com/acme/widget", &dest).unwrap();

        let calls = runner.recorded();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, GIT_PROGRAM);
        assert_eq!(
            calls[0].args,
            vec!["clone", "https://github.com/acme/widget", "/tmp/side/widget"]
        );
        assert_eq!(calls[0].cwd, None);
    }

    #[test]
    fn test_checkout_passes_explicit_workdir() {
        let runner = ScriptedRunner::new();
        let workdir = PathBuf::from("/tmp/side/widget");

        checkout(&runner, &workdir, "1.2.0").unwrap();

        let calls = runner.recorded();
        assert_eq!(calls[0].args, vec!["checkout", "1.2.0"]);
        assert_eq!(calls[0].cwd, Some(workdir));
    }

    #[test]
    fn test_clone_failure_maps_to_git_clone_error() {
        let runner = ScriptedRunner::failing_on("clone");
        let result = clone(&runner, "https://github.com/acme/widget", Path::new("/tmp/x"));

        match result {
            Err(Error::GitClone { url, .. }) => {
                assert_eq!(url, "https://github.com/acme/widget");
            }
            other => panic!("expected GitClone error, got {:?}", other),
        }
    }

    #[test]
    fn test_checkout_failure_maps_to_git_checkout_error() {
        let runner = ScriptedRunner::failing_on("checkout");
        let result = checkout(&runner, Path::new("/tmp/side/widget"), "9.9.9");

        match result {
            Err(Error::GitCheckout { reference, .. }) => assert_eq!(reference, "9.9.9"),
            other => panic!("expected GitCheckout error, got {:?}", other),
        }
    }
}
