//! # Output Configuration
//!
//! Controls how the commands report progress: whether emoji markers are
//! used and whether anything but errors is printed at all.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Composer captures script output without a TTY, so inside script hooks
//! the plain markers are used unless colors are forced.

use std::env;

/// Output configuration for one command run.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
    /// Print only errors.
    pub quiet: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and the `--color` flag.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self {
            use_color,
            quiet: false,
        }
    }

    /// Same configuration, printing nothing but errors.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
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

    /// Pick the emoji or its plain-text stand-in.
    pub fn marker<'a>(&self, emoji: &'a str, plain: &'a str) -> &'a str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }

    /// Print a line prefixed with a status marker, unless quiet.
    pub fn status(&self, emoji: &str, plain: &str, message: impl AsRef<str>) {
        if !self.quiet {
            println!("{} {}", self.marker(emoji, plain), message.as_ref());
        }
    }

    /// Print an indented detail line, unless quiet.
    pub fn detail(&self, message: impl AsRef<str>) {
        if !self.quiet {
            println!("   {}", message.as_ref());
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
