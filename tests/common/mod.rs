//! Shared test utilities for E2E tests.
//!
//! Provides a [`TestFixture`] that stands up a temporary project directory
//! with a `Cartfile.resolved` and, when needed, local git repositories that
//! serve as `file://` remotes, so clone tests exercise the real git binary
//! without touching the network.

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Check whether a git binary is on PATH; clone tests skip without one.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary project directory with an optional manifest and local
/// fixture remotes.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write a `Cartfile.resolved` with the given content.
    pub fn with_manifest(self, content: &str) -> Self {
        self.temp_dir
            .child("Cartfile.resolved")
            .write_str(content)
            .expect("Failed to write manifest");
        self
    }

    /// Create a local git repository under `remotes/<locator>` with one
    /// commit tagged `tag` (whose `VERSION` file holds the tag) and a later
    /// untagged commit on top (whose `VERSION` file holds `dev`).
    ///
    /// Cloning and checking out `tag` must therefore yield `VERSION == tag`.
    #[allow(dead_code)]
    pub fn with_remote(self, locator: &str, tag: &str) -> Self {
        let repo = self.temp_dir.path().join("remotes").join(locator);
        std::fs::create_dir_all(&repo).expect("Failed to create remote directory");

        git(&repo, &["init", "-q"]);
        std::fs::write(repo.join("VERSION"), tag).unwrap();
        std::fs::write(repo.join("README.md"), format!("# {}\n", locator)).unwrap();
        git(&repo, &["add", "-A"]);
        git_commit(&repo, "release");
        git(&repo, &["tag", tag]);

        std::fs::write(repo.join("VERSION"), "dev").unwrap();
        git(&repo, &["add", "-A"]);
        git_commit(&repo, "dev");

        self
    }

    /// The `file://` base URL under which fixture remotes are resolvable.
    #[allow(dead_code)]
    pub fn base_url(&self) -> String {
        format!("file://{}", self.temp_dir.path().join("remotes").display())
    }

    /// Get the path to the temporary project directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path to an entry's side clone.
    #[allow(dead_code)]
    pub fn clone_dir(&self, name: &str) -> PathBuf {
        self.path().join("Carthage/Cartclone").join(name)
    }

    /// Path to an entry's checkout (the symlink after a successful swap).
    #[allow(dead_code)]
    pub fn checkout_path(&self, name: &str) -> PathBuf {
        self.path().join("Carthage/Checkouts").join(name)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("cartclone");
        cmd.current_dir(self.path());
        cmd
    }

    /// A `clone` command against the fixture's local remotes, selecting the
    /// given locators.
    #[allow(dead_code)]
    pub fn clone_command(&self, locators: &[&str]) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("clone").arg("--base-url").arg(self.base_url());
        cmd.arg("--");
        for locator in locators {
            cmd.arg(locator);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

fn git_commit(dir: &Path, message: &str) {
    git(
        dir,
        &[
            "-c",
            "user.name=cartclone-tests",
            "-c",
            "user.email=tests@example.invalid",
            "commit",
            "-q",
            "-m",
            message,
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_manifest() {
        let fixture = TestFixture::new().with_manifest("github \"acme/widget\" \"1.2.0\"\n");
        assert!(fixture.path().join("Cartfile.resolved").exists());
    }

    #[test]
    fn test_fixture_with_remote_is_clonable_shape() {
        if !git_available() {
            eprintln!("Skipping: git not available");
            return;
        }
        let fixture = TestFixture::new().with_remote("acme/widget", "1.2.0");
        assert!(fixture
            .path()
            .join("remotes/acme/widget/.git")
            .exists());
    }
}
