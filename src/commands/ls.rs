//! Ls command implementation
//!
//! Lists the entries declared in the resolved manifest: kind, locator,
//! pinned version and the directory name each would clone into. Read-only;
//! malformed lines are reported on stderr but do not fail the command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use cartclone::manifest::{Manifest, MANIFEST_FILE};

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Path to the resolved manifest
    #[arg(long, value_name = "PATH", default_value = MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Print locators only, one per line
    #[arg(short, long)]
    pub short: bool,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs) -> Result<()> {
    let manifest = Manifest::from_file(&args.manifest)?;

    for line in &manifest.malformed {
        eprintln!("warning: {}", line.to_error());
    }

    for entry in &manifest.entries {
        if args.short {
            println!("{}", entry.locator);
        } else {
            println!("{}  ({})", entry, entry.directory_name());
        }
    }

    Ok(())
}
