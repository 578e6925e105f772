//! `stockroom` binary support: configuration and the demonstration run.

use std::io::Write;
use std::sync::Arc;

use stockroom_core::ItemName;
use stockroom_inventory::{Inventory, MemorySink, RemoveOutcome, Report};
use stockroom_store::{DEFAULT_STORE_PATH, JsonFileStore, LoadStatus};

/// Environment variable overriding the inventory file location.
pub const PATH_ENV_VAR: &str = "STOCKROOM_INVENTORY_PATH";

/// Resolve the inventory file path from the environment, with default.
pub fn store_path_from_env() -> String {
    std::env::var(PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_STORE_PATH.to_string())
}

/// Run the fixed demonstration sequence against `store`, writing
/// human-readable output to `out`.
///
/// Every recoverable condition (missing file, rejected add, missing item,
/// save failure) is reported and skipped; the sequence always runs to the
/// end. `Err` only surfaces when `out` itself cannot be written.
pub fn run(store: &JsonFileStore, out: &mut impl Write) -> anyhow::Result<()> {
    let audit = Arc::new(MemorySink::new());
    let mut inventory = Inventory::with_audit(audit.clone());

    load_reporting(store, &mut inventory);

    let apple = ItemName::new("apple")?;
    let banana = ItemName::new("banana")?;
    let orange = ItemName::new("orange")?;

    if let Err(e) = inventory.add(&apple, 10) {
        tracing::warn!(error = %e, "add rejected");
    }
    // Negative delta: a correction when stock covers it, rejected otherwise.
    if let Err(e) = inventory.add(&banana, -2) {
        tracing::warn!(error = %e, "add rejected");
    }

    report_removal(&apple, inventory.remove(&apple, 3));
    report_removal(&orange, inventory.remove(&orange, 1));

    writeln!(out, "Apple stock: {}", inventory.quantity(&apple))?;
    let low = inventory.low_items_default();
    let low: Vec<&str> = low.iter().map(|n| n.as_str()).collect();
    writeln!(out, "Low items: {low:?}")?;

    if let Err(e) = store.save(&inventory) {
        tracing::error!(error = %e, "could not save inventory");
    }
    load_reporting(store, &mut inventory);

    writeln!(out, "{}", Report::of(&inventory))?;

    for entry in audit.entries() {
        tracing::info!(audit = %entry, "audit trail");
    }
    Ok(())
}

fn load_reporting(store: &JsonFileStore, inventory: &mut Inventory) {
    match store.load_into(inventory) {
        Ok(LoadStatus::Loaded { count }) => {
            tracing::info!(items = count, "inventory loaded");
        }
        Ok(LoadStatus::MissingFile) => {
            tracing::info!("no inventory file yet, starting empty");
        }
        Ok(LoadStatus::InvalidJson { detail }) => {
            tracing::warn!(%detail, "inventory file unreadable, starting empty");
        }
        Err(e) => {
            tracing::error!(error = %e, "could not read inventory file, starting empty");
            inventory.replace(Default::default());
        }
    }
}

fn report_removal(item: &ItemName, outcome: RemoveOutcome) {
    match outcome {
        RemoveOutcome::Removed { remaining } => {
            tracing::info!(item = %item, remaining, "stock removed");
        }
        RemoveOutcome::Depleted => {
            tracing::info!(item = %item, "stock depleted");
        }
        RemoveOutcome::NotFound => {
            tracing::warn!(item = %item, "item not found in stock");
        }
    }
}
