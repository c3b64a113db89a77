//! Command-line interface for `hello`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Pick a demo from the menu
//! hello
//!
//! # Run a demo by name, with widget inputs
//! hello Repetitions --input "Your name=Ada" --input Repetitions=3
//!
//! # Print the final frame only, without color
//! hello Sinc --no-animations --no-color
//!
//! # Show the code listing of a demo
//! hello source Fractals
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::parse_input;

/// Demo gallery for the terminal.
///
/// Every demo is a short Rust function. Running one shows its output
/// followed by the function's own source.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(
    name = "hello",
    author,
    version,
    about = "Demo gallery: charts, fractals and tables with their source",
    long_about = "A small gallery of terminal demos. Each demo renders its output and \
                  then shows the code that produced it."
)]
pub struct Cli {
    /// Demo to run, by name or index (see `hello list`)
    ///
    /// Without a name the menu is shown when stdin is a terminal.
    #[arg(allow_hyphen_values = true)]
    pub demo: Option<String>,

    /// Widget input as LABEL=VALUE
    ///
    /// Supplies the value of a text input or slider, e.g.
    /// `--input "Your name=Ada"`. May be repeated.
    #[arg(long = "input", short = 'i', value_name = "LABEL=VALUE", value_parser = parse_input)]
    pub inputs: Vec<(String, String)>,

    /// Theme to use for styling
    ///
    /// Available themes: dark, light, dracula
    #[arg(long, short = 't', env = "HELLO_THEME")]
    pub theme: Option<String>,

    /// Seed for the random demo data
    ///
    /// The same seed reproduces the same charts.
    #[arg(long, short = 's', env = "HELLO_SEED")]
    pub seed: Option<u64>,

    /// Disable animations
    ///
    /// Only the final frame is printed. Respects `REDUCE_MOTION`.
    #[arg(long, env = "HELLO_NO_ANIMATIONS")]
    pub no_animations: bool,

    /// Force color output off
    ///
    /// Also set by the `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Force color output on (overrides `NO_COLOR`)
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Output width in columns
    ///
    /// Defaults to the terminal width, or 80 when not a terminal.
    #[arg(long, short = 'w')]
    pub width: Option<usize>,

    /// Path to a TOML config file
    #[arg(long, env = "HELLO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the demos with a one-line summary
    List,

    /// Print the code listing of a demo
    Source {
        /// Demo name or index
        #[arg(allow_hyphen_values = true)]
        demo: String,
    },

    /// Show diagnostic information
    Diagnostics,
}

impl Cli {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level derived from verbosity flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The matching `tracing` filter directive.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
