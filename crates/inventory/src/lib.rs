//! Inventory domain module.
//!
//! This crate contains the in-memory inventory store and its business rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod audit;
pub mod report;
pub mod store;

pub use audit::{AuditEntry, AuditSink, MemorySink, NoopSink};
pub use report::Report;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, RemoveOutcome};
