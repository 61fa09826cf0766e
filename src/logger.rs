//! Level-gated writer facade
//!
//! The logger owns the active sink, the global level, and the transaction
//! store. Callers hold an explicit instance or use the process-wide one
//! behind [`Logger::global`].

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use bytes::Bytes;
use parking_lot::{Mutex, RwLock};

use crate::constants::{DEFAULT_LEVEL, SESSION_BANNER, TRANSACTION_LEVEL};
use crate::error::{LogError, Result};
use crate::level::LogLevel;
use crate::sink::{self, Sink};
use crate::store::TransactionStore;

/// Process-wide logger instance, created on first access
static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Leveled writer with per-transaction capture.
///
/// Every write goes through two gates: the configurable global level
/// decides what reaches the main sink, and the fixed transaction level
/// decides what is mirrored into a transaction's capture buffer. The two
/// gates are independent.
///
/// Level and sink are individually locked, so reconfiguration may race
/// with concurrent writers without corrupting either.
pub struct Logger {
    level: RwLock<LogLevel>,
    sink: Mutex<Sink>,
    transactions: TransactionStore,
}

impl Logger {
    /// New logger at the default level, writing to stderr until configured
    pub fn new() -> Self {
        Self {
            level: RwLock::new(DEFAULT_LEVEL),
            sink: Mutex::new(Box::new(io::stderr())),
            transactions: TransactionStore::new(),
        }
    }

    /// The process-wide logger
    pub fn global() -> &'static Logger {
        GLOBAL.get_or_init(Logger::new)
    }

    /// Current global level
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Bind `sink` as the destination for every subsequent write and set
    /// the global level, then emit the session banner: a timestamped blank
    /// line followed by the start marker.
    ///
    /// Reconfiguration mid-run swaps the destination; in-flight transaction
    /// buffers are unaffected.
    pub fn configure(&self, new_sink: Sink, level: LogLevel) {
        *self.level.write() = level;
        let mut sink = self.sink.lock();
        *sink = new_sink;
        sink::write_line(sink.as_mut(), "");
        sink::write_line(sink.as_mut(), SESSION_BANNER);
    }

    /// Open the log file at `path` (append mode, created if missing) and
    /// configure it as the destination at `level`.
    pub fn open_log_file(&self, path: impl AsRef<Path>, level: LogLevel) -> Result<()> {
        let file = sink::open_log_file(path.as_ref())?;
        self.configure(Box::new(file), level);
        Ok(())
    }

    /// Write one line to the sink iff `level` passes the global gate
    pub fn write_line(&self, level: LogLevel, msg: &str) {
        if level <= self.level() {
            sink::write_line(self.sink.lock().as_mut(), msg);
        }
    }

    /// Formatted variant of [`write_line`](Self::write_line). Arguments are
    /// handled by the standard formatting machinery.
    pub fn write_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if level <= self.level() {
            sink::write_line(self.sink.lock().as_mut(), &args.to_string());
        }
    }

    /// Allocate a capture buffer for `id`. Idempotent: a second start with
    /// the same ID preserves the existing buffer and its contents.
    pub fn start_transaction(&self, id: impl Into<String>) {
        self.transactions.start(id);
    }

    /// Write a transaction-tagged line.
    ///
    /// The message always goes to the main log prefixed with the
    /// transaction ID, gated by the global level. ERROR and WARN messages
    /// are additionally appended, unprefixed, to the transaction's buffer
    /// if one exists; a missing buffer is reported as a WARN line on the
    /// main log and the call still succeeds.
    pub fn transaction_write_line(&self, level: LogLevel, id: &str, msg: &str) {
        self.write_line(level, &format!("| {} | {}", id, msg));

        if level <= TRANSACTION_LEVEL && !self.transactions.append(id, msg.as_bytes()) {
            self.write_fmt(
                LogLevel::Warn,
                format_args!("Cannot find transaction {} logging buffer", id),
            );
        }
    }

    /// Formatted variant of
    /// [`transaction_write_line`](Self::transaction_write_line).
    pub fn transaction_write_fmt(&self, level: LogLevel, id: &str, args: fmt::Arguments<'_>) {
        self.transaction_write_line(level, id, &args.to_string());
    }

    /// Remove the capture buffer for `id` and return its accumulated
    /// contents: the raw concatenation of the appended message bodies, with
    /// no separators. Empty if the transaction logged nothing at ERROR or
    /// WARN.
    pub fn end_transaction(&self, id: &str) -> Result<Bytes> {
        self.transactions
            .end(id)
            .ok_or_else(|| LogError::UnknownTransaction { id: id.to_string() })
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
