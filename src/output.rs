//! # Output Configuration
//!
//! Controls whether progress lines use color and emoji, honoring the
//! `--color` flag plus the usual environment conventions: `NO_COLOR`
//! (https://no-color.org/), `CLICOLOR=0`, `CLICOLOR_FORCE=1` and `TERM=dumb`.
//! TTY detection comes from the `console` crate.

use std::env;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color`
    /// flag value (`always`, `never` or `auto`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // NO_COLOR disables on presence alone, even when empty
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain alternative
/// otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji
    } else {
        plain
    }
}
