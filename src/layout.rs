//! # Project Layout
//!
//! Path derivation for the directory shape this tool maintains inside a
//! project:
//!
//! ```text
//! <project>/Cartfile.resolved          the manifest
//! <project>/Carthage/Cartclone/<name>  side root: full clones
//! <project>/Carthage/Checkouts/<name>  the manager's checkout, becomes a symlink
//! ```
//!
//! The root should be an absolute path; symlink targets are derived from it
//! and a relative root would leave them dangling when resolved from inside
//! `Carthage/Checkouts`.

use std::path::{Path, PathBuf};

use crate::manifest::MANIFEST_FILE;

/// Side root holding the full clones, relative to the project root.
pub const SIDE_ROOT: &str = "Carthage/Cartclone";

/// The dependency manager's own checkout tree, relative to the project root.
pub const CHECKOUTS_ROOT: &str = "Carthage/Checkouts";

/// Derived paths for one project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    project_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Default manifest location for this project.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root.join(MANIFEST_FILE)
    }

    /// Directory holding the full clones.
    pub fn side_root(&self) -> PathBuf {
        self.project_root.join(SIDE_ROOT)
    }

    /// Where an entry's full clone lives.
    pub fn clone_dir(&self, directory_name: &str) -> PathBuf {
        self.side_root().join(directory_name)
    }

    /// The manager's checkout path for an entry; after a successful swap this
    /// is a symlink to [`ProjectLayout::clone_dir`].
    pub fn checkout_path(&self, directory_name: &str) -> PathBuf {
        self.project_root.join(CHECKOUTS_ROOT).join(directory_name)
    }
}
