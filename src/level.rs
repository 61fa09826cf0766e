//! Log level type
//!
//! Ordered severity levels shared by the main log gate and the
//! transaction-buffer gate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Message criticality.
///
/// Declaration order is the gate order: a message at level `L` passes a
/// destination gated at threshold `T` iff `L <= T`, so a destination's
/// threshold is the least-severe level it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Errors and other critical failures
    Error,
    /// Unexpected situations that should be recoverable
    Warn,
    /// Expected operational events
    Info,
    /// Verbose output for debugging
    Debug,
}

impl LogLevel {
    /// Literal name of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    /// Exact inverse of [`LogLevel::as_str`]. No case folding, no trimming.
    fn from_str(s: &str) -> Result<Self, LogError> {
        match s {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(LogError::InvalidLevel {
                text: s.to_string(),
            }),
        }
    }
}
