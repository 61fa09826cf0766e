//! Crate-wide constants
//!
//! Centralized policy values to avoid duplication and ensure consistency.

use crate::level::LogLevel;

// =============================================================================
// Levels
// =============================================================================

/// Global level before any configuration
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Fixed threshold for transaction buffers. Only ERROR and WARN messages
/// are mirrored into a transaction's buffer, independent of the global
/// level. Not caller-configurable.
pub const TRANSACTION_LEVEL: LogLevel = LogLevel::Warn;

// =============================================================================
// Sink
// =============================================================================

/// Marker written to the sink on every (re)configuration
pub const SESSION_BANNER: &str = "-----WACE started-----";

/// Local-time prefix of every log line, microsecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Permissions for newly created log files (unix)
pub const LOG_FILE_MODE: u32 = 0o644;

// =============================================================================
// Settings
// =============================================================================

/// Log destination when the settings file does not name one
pub const DEFAULT_LOG_PATH: &str = "wace.log";
