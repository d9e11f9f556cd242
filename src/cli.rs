//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::commands;
use cartclone::output::OutputConfig;

/// Cartclone - Clone pinned dependencies with full history and swap the
/// manager's checkouts for symlinks
#[derive(Parser, Debug)]
#[command(name = "cartclone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone selected manifest entries and swap their checkouts for symlinks
    Clone(commands::clone::CloneArgs),

    /// List the entries declared in the resolved manifest
    Ls(commands::ls::LsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(Env::default().default_filter_or(&self.log_level))
            .format_timestamp(None)
            .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Clone(args) => commands::clone::execute(args, &output),
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
