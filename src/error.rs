//! Centralized error types for the logging subsystem
//!
//! All errors are represented by the `LogError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, LogError>`.

use std::fmt;
use std::path::PathBuf;

/// All logging errors
#[derive(Debug)]
pub enum LogError {
    // === Levels ===
    /// Unrecognized log level literal
    InvalidLevel { text: String },

    // === Sink ===
    /// Failed to open the log file
    SinkOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    // === Transactions ===
    /// Ended a transaction that was never started
    UnknownTransaction { id: String },

    // === Settings ===
    /// Settings file read or write failed
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SinkOpen { source, .. } | Self::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { text } => write!(f, "invalid log level {}", text),
            Self::SinkOpen { path, .. } => {
                write!(f, "Cannot open log file: {}", path.display())
            }
            Self::UnknownTransaction { id } => write!(f, "Unknown transaction: {}", id),
            Self::ConfigRead { path, .. } => {
                write!(f, "Cannot access settings file: {}", path.display())
            }
        }
    }
}

/// Alias for Result with LogError
pub type Result<T> = std::result::Result<T, LogError>;
