//! Clone command implementation
//!
//! The core operation: parse the resolved manifest, intersect it with the
//! locators given after `--`, then for each selected entry clone the remote
//! into `Carthage/Cartclone`, check out the pinned version, and replace
//! `Carthage/Checkouts/<name>` with a symlink to the fresh clone.
//!
//! One entry failing does not stop the rest; the command reports a summary
//! and exits non-zero if any entry failed.

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use cartclone::layout::ProjectLayout;
use cartclone::manifest::Manifest;
use cartclone::orchestrator::{CloneOptions, EntryStatus, Orchestrator};
use cartclone::output::{emoji, OutputConfig};
use cartclone::process::SystemRunner;
use cartclone::remote::RemoteBase;
use cartclone::selection::select;

/// Arguments for the clone command
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Project directory containing the manifest and the Carthage tree
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub project_dir: PathBuf,

    /// Path to the resolved manifest
    /// (defaults to <PROJECT_DIR>/Cartfile.resolved)
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Base URL that locators are resolved against
    #[arg(long, value_name = "URL", env = "CARTCLONE_BASE_URL")]
    pub base_url: Option<String>,

    /// Number of entries to process at once
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub jobs: usize,

    /// Warn instead of failing an entry when its pinned version cannot be
    /// checked out
    #[arg(long)]
    pub skip_checkout_failures: bool,

    /// Show what would be done without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Locators to process, given after `--`
    #[arg(last = true, value_name = "LOCATOR")]
    pub locators: Vec<String>,
}

/// Execute the clone command
pub fn execute(args: CloneArgs, output: &OutputConfig) -> Result<()> {
    let start_time = Instant::now();

    // Symlink targets are derived from this root, so it must be absolute
    let project_root = fs::canonicalize(&args.project_dir).map_err(|e| {
        anyhow::anyhow!(
            "Project directory not found: {}: {}",
            args.project_dir.display(),
            e
        )
    })?;
    let layout = ProjectLayout::new(project_root);

    let manifest_path = args.manifest.unwrap_or_else(|| layout.manifest_path());
    let manifest = Manifest::from_file(&manifest_path)?;

    for line in &manifest.malformed {
        eprintln!("warning: {}", line.to_error());
    }

    let selected = select(&manifest.entries, &args.locators);
    if selected.is_empty() {
        // No trailing locators (or none matched) is a normal no-op run
        if !args.quiet {
            println!(
                "{} No entries selected ({} declared in {})",
                emoji(output, "ℹ️", "[INFO]"),
                manifest.entries.len(),
                manifest_path.display()
            );
        }
        return Ok(());
    }

    let remote = match &args.base_url {
        Some(base) => RemoteBase::new(base)?,
        None => RemoteBase::default(),
    };

    if args.dry_run {
        for entry in &selected {
            let url = remote.url_for(&entry.locator)?;
            println!(
                "Would clone {} into {} at {}",
                url,
                layout.clone_dir(entry.directory_name()).display(),
                entry.version
            );
        }
        return Ok(());
    }

    let runner = SystemRunner;
    let options = CloneOptions {
        skip_checkout_failures: args.skip_checkout_failures,
        jobs: args.jobs,
        quiet: args.quiet,
    };
    let orchestrator = Orchestrator::new(&runner, &layout, &remote, options);
    let outcomes = orchestrator.run(&selected)?;

    let failed: Vec<_> = outcomes.iter().filter(|o| o.is_failed()).collect();
    if failed.is_empty() {
        if !args.quiet {
            println!(
                "{} {} entries processed in {:.2}s",
                emoji(output, "✅", "[OK]"),
                outcomes.len(),
                start_time.elapsed().as_secs_f64()
            );
        }
        return Ok(());
    }

    for outcome in &failed {
        if let EntryStatus::Failed { step, error } = &outcome.status {
            eprintln!(
                "{} {} failed during {}: {}",
                emoji(output, "❌", "[FAIL]"),
                outcome.locator,
                step,
                error
            );
        }
    }
    anyhow::bail!("{} of {} selected entries failed", failed.len(), outcomes.len())
}
