//! JSON file persistence for the inventory store.
//!
//! The on-disk format is a UTF-8 JSON object keyed by item name with numeric
//! quantities, written with 4-space indentation for human readability.

pub mod json_file;

pub use json_file::{DEFAULT_STORE_PATH, JsonFileStore, LoadOutcome, LoadStatus, StoreError};
