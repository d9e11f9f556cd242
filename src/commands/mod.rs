//! # CLI Command Implementations
//!
//! One module per subcommand. Each module defines a clap `Args` struct and an
//! `execute` function that performs the command by calling into the
//! `cartclone` library; errors bubble up as `anyhow::Result` and exit the
//! process with code 1.

pub mod clone;
pub mod completions;
pub mod ls;
