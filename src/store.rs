//! Per-transaction capture buffers
//!
//! Concurrent map from transaction ID to an accumulating byte buffer.
//! Pure data structure with no I/O side effects; the level policy lives in
//! the logger.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::{Bytes, BytesMut};
use parking_lot::{Mutex, RwLock};

/// Concurrent map of transaction capture buffers.
///
/// The map is guarded by a reader/writer lock: exclusive for structural
/// changes ([`start`](Self::start), [`end`](Self::end)), shared for the
/// lookup on the append path. Each buffer carries its own mutex, so the
/// map lock is released before the append and concurrent appends to one
/// transaction do not race.
pub struct TransactionStore {
    buffers: RwLock<HashMap<String, Arc<Mutex<BytesMut>>>>,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            buffers: RwLock::new(HashMap::new()),
        }
    }

    /// Insert an empty buffer for `id`.
    ///
    /// No-op if a buffer already exists; its contents are preserved.
    pub fn start(&self, id: impl Into<String>) {
        let mut buffers = self.buffers.write();
        buffers.entry(id.into()).or_default();
    }

    /// Append `data` to `id`'s buffer. Returns false if no buffer exists;
    /// a missing buffer is never created here.
    pub fn append(&self, id: &str, data: &[u8]) -> bool {
        let buffer = self.buffers.read().get(id).cloned();
        match buffer {
            Some(buffer) => {
                buffer.lock().extend_from_slice(data);
                true
            }
            None => false,
        }
    }

    /// Remove `id`'s buffer and return its accumulated contents, or `None`
    /// if no buffer exists.
    pub fn end(&self, id: &str) -> Option<Bytes> {
        let buffer = self.buffers.write().remove(id)?;
        let contents = buffer.lock().split().freeze();
        Some(contents)
    }

    /// Whether a buffer currently exists for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.buffers.read().contains_key(id)
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
