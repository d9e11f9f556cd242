//! # Cartclone Library
//!
//! Core functionality for the `cartclone` command-line tool, which mirrors a
//! Carthage-style resolved manifest by cloning selected dependencies with
//! full Git history into a side directory and swapping the dependency
//! manager's own checkouts for symbolic links into it.
//!
//! ## Quick Example
//!
//! ```
//! use cartclone::manifest::Manifest;
//! use cartclone::selection::select;
//!
//! let manifest = Manifest::parse(
//!     "github \"acme/widget\" \"1.2.0\"\n\
//!      github \"acme/gadget\" \"2.0.0\"\n",
//! );
//! assert_eq!(manifest.entries.len(), 2);
//!
//! let selected = select(&manifest.entries, &["acme/widget".to_string()]);
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].directory_name(), "widget");
//! ```
//!
//! ## Core Concepts
//!
//! - **Manifest (`manifest`)**: parses `Cartfile.resolved` into immutable
//!   entries, skipping comments and recording malformed lines instead of
//!   crashing on them.
//! - **Selection (`selection`)**: order-preserving intersection of the parsed
//!   entries with the locators requested on the command line.
//! - **Remote (`remote`)**: the locator-to-URL rule, with a configurable base
//!   defaulting to GitHub.
//! - **Layout (`layout`)**: the `Carthage/Cartclone` side root and
//!   `Carthage/Checkouts` paths derived from a project directory.
//! - **Process and Git (`process`, `git`)**: the external-command seam; git
//!   is invoked synchronously with an explicit working directory, never by
//!   mutating the process-wide current directory.
//! - **Orchestrator (`orchestrator`)**: the clone -> checkout -> remove ->
//!   link pipeline per entry, failure isolation between entries, and the
//!   optional bounded worker pool.
//!
//! After a successful run, `Carthage/Checkouts/<name>` is a symlink to
//! `Carthage/Cartclone/<name>`, a real working copy checked out at the
//! pinned version.

pub mod error;
pub mod git;
pub mod layout;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod process;
pub mod remote;
pub mod selection;
