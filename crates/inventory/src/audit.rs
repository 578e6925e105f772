//! Audit log abstraction for inventory mutations.
//!
//! Mutations record human-readable, timestamped entries through an injected
//! [`AuditSink`]. The default sink discards entries, so auditing is strictly
//! opt-in.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use stockroom_core::ItemName;

/// A single timestamped audit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    pub fn added(item: &ItemName, qty: i64) -> Self {
        Self {
            at: Utc::now(),
            message: format!("Added {qty} of {item}"),
        }
    }

    pub fn removed(item: &ItemName, qty: i64) -> Self {
        Self {
            at: Utc::now(),
            message: format!("Removed {qty} of {item}"),
        }
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.at, self.message)
    }
}

/// Recipient of audit entries.
///
/// Takes `&self` so implementations can be shared (e.g. behind `Arc`) between
/// the store and an observer; implementations use interior mutability.
pub trait AuditSink {
    fn record(&self, entry: AuditEntry);
}

/// Sink that discards every entry. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AuditSink for NoopSink {
    fn record(&self, _entry: AuditEntry) {}
}

/// In-memory sink that buffers entries for later inspection.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().expect("audit sink lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("audit sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditSink for MemorySink {
    fn record(&self, entry: AuditEntry) {
        self.entries
            .lock()
            .expect("audit sink lock poisoned")
            .push(entry);
    }
}
