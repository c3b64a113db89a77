//! Runtime configuration for `hello`.
//!
//! [`Config`] is the single source of truth for toggles and settings,
//! independent of how they were specified. Values are layered: an optional
//! TOML file first, then environment variables and flags through clap.
//!
//! # Examples
//!
//! ```rust
//! use hello::config::{ColorMode, Config};
//!
//! let config: Config = toml::from_str(
//!     r#"
//!     theme = "dracula"
//!     color = "never"
//!     seed = 7
//!
//!     [inputs]
//!     "Your name" = "Ada"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.color, ColorMode::Never);
//! assert_eq!(config.inputs["Your name"], "Ada");
//! assert!(config.animations);
//! ```

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::theme::ThemePreset;

/// Narrowest output the renderer accepts.
pub const MIN_WIDTH: usize = 20;

/// Width used when stdout is not a terminal and none was configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Runtime configuration for the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Theme preset to use.
    pub theme: ThemePreset,

    /// Color output mode.
    pub color: ColorMode,

    /// Whether demos animate. Off means only the final frame is printed.
    pub animations: bool,

    /// Seed for demo data (None = time-based).
    pub seed: Option<u64>,

    /// Output width in columns (None = terminal width).
    pub width: Option<usize>,

    /// Widget values by label.
    pub inputs: BTreeMap<String, String>,

    /// Verbosity level (0 = normal, 1+ = verbose). Never read from a file.
    #[serde(skip)]
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemePreset::Dark,
            color: ColorMode::Auto,
            animations: true,
            seed: None,
            width: None,
            inputs: BTreeMap::new(),
            verbosity: 0,
        }
    }
}

impl Config {
    /// Create a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Create config from CLI arguments, on top of the config file if one
    /// was given.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be loaded or the theme is unknown.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        base.merge_cli(cli)
    }

    /// Overlays flags (and the env vars clap resolved for them).
    ///
    /// # Errors
    ///
    /// Fails when the theme name matches no preset.
    pub fn merge_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(name) = &cli.theme {
            self.theme = name
                .parse()
                .map_err(|_| ConfigError::InvalidTheme(name.clone()))?;
        }

        if cli.force_color {
            self.color = ColorMode::Always;
        } else if cli.no_color {
            self.color = ColorMode::Never;
        }

        if cli.no_animations || std::env::var_os("REDUCE_MOTION").is_some() {
            self.animations = false;
        }

        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.width.is_some() {
            self.width = cli.width;
        }

        self.inputs.extend(cli.inputs.iter().cloned());
        self.verbosity = cli.verbose;
        Ok(self)
    }

    /// Get the effective seed for demo data.
    ///
    /// If no seed was specified, generates one from the current time.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Seed truncation is acceptable"
    )]
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(42, |d| d.as_nanos() as u64)
        })
    }

    /// Check if colors should be used.
    ///
    /// In auto mode, color is on only for a terminal and when `NO_COLOR`
    /// is unset.
    #[must_use]
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }

    /// The configured width, or the terminal width, or [`DEFAULT_WIDTH`].
    #[must_use]
    pub fn effective_width(&self) -> usize {
        self.width.unwrap_or_else(|| {
            crossterm::terminal::size()
                .ok()
                .filter(|_| std::io::stdout().is_terminal())
                .map_or(DEFAULT_WIDTH, |(cols, _)| usize::from(cols))
                .max(MIN_WIDTH)
        })
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is narrower than [`MIN_WIDTH`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.width {
            Some(width) if width < MIN_WIDTH => Err(ConfigError::InvalidWidth(width)),
            _ => Ok(()),
        }
    }

    /// Export configuration as a diagnostic string.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Theme: {:?}", self.theme));
        lines.push(format!("Color mode: {:?}", self.color));
        lines.push(format!(
            "Animations: {}",
            if self.animations { "on" } else { "off" }
        ));
        lines.push(format!("Seed: {:?}", self.seed));
        lines.push(format!("Width: {:?}", self.width));
        lines.push(format!("Verbosity: {}", self.verbosity));
        if self.inputs.is_empty() {
            lines.push("Inputs: none".to_owned());
        } else {
            lines.push("Inputs:".to_owned());
            for (label, value) in &self.inputs {
                lines.push(format!("  {label} = {value}"));
            }
        }

        lines.join("\n")
    }
}

/// Splits a `LABEL=VALUE` widget input at the first `=`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidInput`] when there is no `=` or the label is
/// blank.
pub fn parse_input(raw: &str) -> Result<(String, String), ConfigError> {
    match raw.split_once('=') {
        Some((label, value)) if !label.trim().is_empty() => {
            Ok((label.trim().to_owned(), value.to_owned()))
        }
        _ => Err(ConfigError::InvalidInput(raw.to_owned())),
    }
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Automatically detect based on terminal and environment.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`Config`].
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },

    /// Widget input not of the form `LABEL=VALUE`.
    #[error("Invalid input {0:?}: expected LABEL=VALUE")]
    InvalidInput(String),

    /// Theme name matches no preset.
    #[error("Unknown theme {0:?}: expected dark, light or dracula")]
    InvalidTheme(String),

    /// Width below [`MIN_WIDTH`].
    #[error("Width {0} is too narrow: at least {MIN_WIDTH} columns are needed")]
    InvalidWidth(usize),
}
