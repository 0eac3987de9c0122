//! # Output and Progress Reporting
//!
//! Operator-facing progress for link runs. Every destructive step is
//! announced through a [`Reporter`] before it happens, so an interrupted run
//! leaves a readable trail of what was already changed.
//!
//! ## Respecting User Preferences
//!
//! Colour is decided by [`OutputConfig`]:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::cell::RefCell;
use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether styled output should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `always` and `never` are taken literally; anything else detects
    /// support from the environment and the terminal.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
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

enum Sink {
    Stdout { use_color: bool },
    Silent,
    Capture(RefCell<Vec<String>>),
}

/// Writes progress lines for a link run.
///
/// Runs are single-threaded, so the capturing sink uses a `RefCell`.
pub struct Reporter {
    sink: Sink,
}

impl Reporter {
    /// Prints to stdout (errors to stderr).
    pub fn stdout(config: &OutputConfig) -> Self {
        Self {
            sink: Sink::Stdout {
                use_color: config.use_color,
            },
        }
    }

    /// Discards everything.
    pub fn silent() -> Self {
        Self { sink: Sink::Silent }
    }

    /// Keeps lines in memory; read them back with [`Reporter::lines`].
    pub fn capturing() -> Self {
        Self {
            sink: Sink::Capture(RefCell::new(Vec::new())),
        }
    }

    /// Lines recorded by a capturing reporter.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Capture(lines) => lines.borrow().clone(),
            _ => Vec::new(),
        }
    }

    /// A bold step header, e.g. "cloning module 'blog'...".
    pub fn step(&self, message: &str) {
        self.emit(message, |m| style(m).bold().to_string(), false);
    }

    /// Completion of the current step.
    pub fn done(&self) {
        self.emit("done.", |m| style(m).bold().green().to_string(), false);
    }

    /// A plain notice; used before every destructive filesystem action.
    pub fn notice(&self, message: &str) {
        self.emit(message, |m| m.to_string(), false);
    }

    /// A failure line, written to stderr.
    pub fn error(&self, message: &str) {
        self.emit(message, |m| style(m).red().to_string(), true);
    }

    fn emit(&self, message: &str, styled: impl Fn(&str) -> String, to_stderr: bool) {
        match &self.sink {
            Sink::Stdout { use_color } => {
                let line = if *use_color {
                    styled(message)
                } else {
                    message.to_string()
                };
                if to_stderr {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            }
            Sink::Silent => {}
            Sink::Capture(lines) => lines.borrow_mut().push(message.to_string()),
        }
    }
}
