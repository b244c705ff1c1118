//! Error types for the polar plotter.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotter operations.
pub type Result<T> = std::result::Result<T, PlotterError>;

/// Errors that can occur in the polar plotter.
#[derive(Debug, Error)]
pub enum PlotterError {
    /// The angle field did not hold a finite number at submit time.
    #[error("Please enter a valid angle")]
    InvalidAngle {
        /// Raw text that failed to parse.
        input: String,
    },

    /// Failed to open the log file.
    #[error("Failed to open log file: {path}")]
    LogFile {
        /// Requested log path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Nothing to act on (no point selected, no coordinates recorded).
    #[error("Nothing to copy: {0}")]
    NothingToCopy(&'static str),
}

impl PlotterError {
    /// Create an InvalidAngle error.
    pub fn invalid_angle(input: impl Into<String>) -> Self {
        Self::InvalidAngle {
            input: input.into(),
        }
    }

    /// Create a LogFile error.
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::LogFile { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_angle_message_matches_alert_text() {
        let err = PlotterError::invalid_angle("abc");
        assert_eq!(err.to_string(), "Please enter a valid angle");
    }

    #[test]
    fn log_file_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PlotterError::log_file(PathBuf::from("/nope/x.log"), io);
        assert!(err.to_string().contains("/nope/x.log"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
