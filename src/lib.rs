//! Leveled logging with per-transaction capture buffers
//!
//! One logger feeds two kinds of destination:
//! - the **main log**: every message that passes the configurable global
//!   level gate, written to the active sink as timestamped lines
//! - **transaction buffers**: for selected in-flight transactions, an
//!   isolated capture of just that transaction's ERROR and WARN messages,
//!   drained on demand for later inspection or forwarding
//!
//! ```
//! use wace_log::{LogLevel, Logger};
//!
//! let logger = Logger::new();
//! logger.configure(Box::new(Vec::<u8>::new()), LogLevel::Debug);
//!
//! logger.start_transaction("tx-1");
//! logger.transaction_write_line(LogLevel::Warn, "tx-1", "upstream timeout");
//! let captured = logger.end_transaction("tx-1").unwrap();
//! assert_eq!(&captured[..], b"upstream timeout");
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod level;
pub mod logger;
pub mod sink;
pub mod store;

pub use config::{LogSettings, Settings};
pub use error::{LogError, Result};
pub use level::LogLevel;
pub use logger::Logger;
pub use sink::Sink;
pub use store::TransactionStore;
