//! # Clone Orchestration
//!
//! Drives the per-entry pipeline: clone the remote into the side root, check
//! out the pinned version, remove the manager's checkout, and symlink the
//! checkout path to the fresh clone. The pipeline is an explicit step
//! sequence (clone -> checkout -> remove -> link); a failed step marks the
//! entry failed and skips its remaining steps, but never halts the queue.
//! The caller inspects the collected [`EntryOutcome`]s and exits non-zero if
//! any entry failed.
//!
//! Entries are independent of one another (separate directories, separate
//! remotes), so `jobs > 1` runs them on a bounded rayon pool. Step order
//! within an entry is always preserved, and outcomes come back in manifest
//! order either way.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::git;
use crate::layout::ProjectLayout;
use crate::manifest::ManifestEntry;
use crate::process::ProcessRunner;
use crate::remote::RemoteBase;

/// The pipeline step at which an entry failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Clone,
    Checkout,
    Remove,
    Link,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Clone => "clone",
            Step::Checkout => "checkout",
            Step::Remove => "remove",
            Step::Link => "link",
        };
        f.write_str(name)
    }
}

/// Terminal state of one entry's pipeline.
#[derive(Debug)]
pub enum EntryStatus {
    Completed,
    Failed { step: Step, error: Error },
}

/// Result of processing one manifest entry.
#[derive(Debug)]
pub struct EntryOutcome {
    pub locator: String,
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, EntryStatus::Failed { .. })
    }
}

/// Behavior switches for a run.
#[derive(Debug, Clone)]
pub struct CloneOptions {
    /// Treat a failed checkout as a warning and continue to the swap.
    ///
    /// Off by default; the entry is marked failed and keeps the clone for
    /// inspection, but no swap happens.
    pub skip_checkout_failures: bool,
    /// Worker pool size; 1 processes entries strictly in sequence.
    pub jobs: usize,
    /// Suppress per-entry progress lines on stdout.
    pub quiet: bool,
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self {
            skip_checkout_failures: false,
            jobs: 1,
            quiet: false,
        }
    }
}

/// Runs the clone/checkout/swap pipeline over a filtered entry list.
pub struct Orchestrator<'a> {
    runner: &'a (dyn ProcessRunner + Sync),
    layout: &'a ProjectLayout,
    remote: &'a RemoteBase,
    options: CloneOptions,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        runner: &'a (dyn ProcessRunner + Sync),
        layout: &'a ProjectLayout,
        remote: &'a RemoteBase,
        options: CloneOptions,
    ) -> Self {
        Self {
            runner,
            layout,
            remote,
            options,
        }
    }

    /// Process all entries, returning one outcome per entry in input order.
    ///
    /// Only the setup of the side root and checkout tree can fail the run as
    /// a whole; everything per-entry is captured in its outcome.
    pub fn run(&self, entries: &[ManifestEntry]) -> Result<Vec<EntryOutcome>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        fs::create_dir_all(self.layout.side_root())?;

        let outcomes = if self.options.jobs <= 1 {
            entries.iter().map(|e| self.process_entry(e)).collect()
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.jobs)
                .build()?;
            pool.install(|| entries.par_iter().map(|e| self.process_entry(e)).collect())
        };

        Ok(outcomes)
    }

    fn process_entry(&self, entry: &ManifestEntry) -> EntryOutcome {
        let clone_dir = self.layout.clone_dir(entry.directory_name());

        if !self.options.quiet {
            println!("Cloning {} into {}", entry.locator, clone_dir.display());
        }

        match self.run_pipeline(entry) {
            Ok(()) => {
                if !self.options.quiet {
                    println!("...done");
                }
                EntryOutcome {
                    locator: entry.locator.clone(),
                    status: EntryStatus::Completed,
                }
            }
            Err((step, error)) => {
                log::warn!("{} failed at {}: {}", entry.locator, step, error);
                EntryOutcome {
                    locator: entry.locator.clone(),
                    status: EntryStatus::Failed { step, error },
                }
            }
        }
    }

    fn run_pipeline(&self, entry: &ManifestEntry) -> std::result::Result<(), (Step, Error)> {
        let name = entry.directory_name();
        // An empty or traversing name would point the remove step at the
        // Checkouts tree itself (or above it)
        if name.is_empty() || name == "." || name == ".." {
            return Err((
                Step::Clone,
                Error::InvalidLocator {
                    locator: entry.locator.clone(),
                },
            ));
        }
        let clone_dir = self.layout.clone_dir(name);
        let checkout_path = self.layout.checkout_path(name);

        let url = self
            .remote
            .url_for(&entry.locator)
            .map_err(|e| (Step::Clone, e))?;

        // git refuses to clone over a stale side clone from an earlier run
        remove_existing(&clone_dir).map_err(|e| (Step::Clone, e))?;
        git::clone(self.runner, url.as_str(), &clone_dir).map_err(|e| (Step::Clone, e))?;

        if let Err(error) = git::checkout(self.runner, &clone_dir, &entry.version) {
            if self.options.skip_checkout_failures {
                log::warn!(
                    "checkout of {} failed in {}, continuing: {}",
                    entry.version,
                    clone_dir.display(),
                    error
                );
            } else {
                return Err((Step::Checkout, error));
            }
        }

        remove_existing(&checkout_path).map_err(|e| (Step::Remove, e))?;

        if let Some(parent) = checkout_path.parent() {
            fs::create_dir_all(parent).map_err(|e| (Step::Link, e.into()))?;
        }
        symlink_dir(&clone_dir, &checkout_path).map_err(|e| (Step::Link, e.into()))?;

        Ok(())
    }
}

/// Remove whatever occupies `path`, tolerating absence.
///
/// The checkout path may be a real directory (the manager's checkout), a
/// symlink from a previous run, or missing entirely; all three are fine.
fn remove_existing(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(fs::remove_dir_all(path)?),
        Ok(_) => Ok(fs::remove_file(path)?),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
