//! # Error Handling
//!
//! Centralized error type for the `cartclone` library, built with `thiserror`.
//! Every failure mode the library can hit has a variant carrying enough
//! context (path, URL, git ref, stderr) to produce a useful message without
//! the caller adding anything.
//!
//! Startup failures (an unreadable manifest) abort the run; per-entry
//! failures (a clone or checkout that exits non-zero) are carried in the
//! entry's outcome so the rest of the queue can continue.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cartclone operations
#[derive(Error, Debug)]
pub enum Error {
    /// The resolved manifest file could not be read.
    #[error("Could not read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest line did not tokenize into kind, locator and version.
    #[error("Malformed manifest line {number}: {content:?}")]
    ManifestLine { number: usize, content: String },

    /// A locator does not yield a usable directory name.
    ///
    /// Guards the swap: a name of `""`, `"."` or `".."` would make the
    /// remove step escape the entry's own checkout path.
    #[error("Locator {locator:?} does not name a repository directory")]
    InvalidLocator { locator: String },

    /// An error occurred while cloning a Git repository.
    ///
    /// Includes the repository URL, the error message, and an optional hint
    /// for resolution.
    #[error("Git clone error for {url}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// An error occurred while checking out a pinned version.
    #[error("Git checkout error for {reference} in {dir}: {message}")]
    GitCheckout {
        reference: String,
        dir: String,
        message: String,
    },

    /// An external command could not be launched at all.
    #[error("Failed to launch {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// An external command ran but exited with a non-zero status.
    #[error("{program} exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A worker pool could not be constructed.
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
