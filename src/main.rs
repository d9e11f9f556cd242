//! # Cartclone CLI
//!
//! Binary entry point for the `cartclone` command-line tool.
//!
//! Argument parsing and command dispatch live in `cli`; the per-subcommand
//! logic lives in `commands`, which calls into the `cartclone` library. The
//! binary itself is a thin wrapper: parse, execute, let `anyhow` render any
//! top-level error to stderr with exit code 1.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
