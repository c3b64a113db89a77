//! Error types for running the gallery.

use crate::config::ConfigError;

/// Errors surfaced while selecting, running or drawing a demo.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// No demo with this name or index.
    #[error("Unknown demo {0:?}; run `hello list` to see the demos")]
    UnknownDemo(String),

    /// The demo has no code to show.
    #[error("Demo {0:?} has no source listing")]
    NoSource(String),

    /// Writing to the terminal failed.
    #[error("Terminal output failed: {0}")]
    Io(#[from] std::io::Error),

    /// A demo body returned an error.
    #[error("Demo {name:?} failed: {source}")]
    Demo {
        name: String,
        source: anyhow::Error,
    },

    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn unknown_demo_mentions_list_command() {
        let err = GalleryError::UnknownDemo("Bart".to_owned());
        assert_eq!(
            err.to_string(),
            "Unknown demo \"Bart\"; run `hello list` to see the demos"
        );
    }

    #[test]
    fn demo_error_keeps_its_source() {
        let err = GalleryError::Demo {
            name: "Movies".to_owned(),
            source: anyhow::anyhow!("dataset missing"),
        };
        assert_eq!(err.to_string(), "Demo \"Movies\" failed: dataset missing");
        assert!(err.source().is_some());
    }

    #[test]
    fn config_errors_are_transparent() {
        let err = GalleryError::from(ConfigError::InvalidWidth(1));
        assert_eq!(err.to_string(), ConfigError::InvalidWidth(1).to_string());
    }
}
