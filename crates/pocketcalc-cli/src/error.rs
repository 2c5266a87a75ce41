//! Error types for the CLI

use pocketcalc::prelude::SnapshotError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
///
/// Calculator notices (division by zero, square root of a negative) are not
/// errors here; they are reported and the command still succeeds.
#[derive(Debug, Error)]
pub enum CliError {
    /// A character in the key script is not a calculator key
    #[error("Invalid key '{key}' at position {position}")]
    InvalidKey {
        /// The offending character
        key: char,
        /// Zero-based character position in the script
        position: usize,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file could not be parsed or restored
    #[error("Corrupt state file {}: {source}", .path.display())]
    Snapshot {
        /// File that was being read
        path: PathBuf,
        /// Underlying snapshot error
        #[source]
        source: SnapshotError,
    },

    /// Snapshot could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup or teardown failed
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid key error from the script it was found in
    #[must_use]
    pub fn invalid_key(keys: &str, key: char) -> Self {
        let position = keys.chars().position(|c| c == key).unwrap_or_default();
        Self::InvalidKey { key, position }
    }

    /// Create a snapshot error for a state file
    #[must_use]
    pub fn snapshot(path: impl Into<PathBuf>, source: SnapshotError) -> Self {
        Self::Snapshot {
            path: path.into(),
            source,
        }
    }

    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
