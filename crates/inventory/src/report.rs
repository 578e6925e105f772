//! Human-readable inventory report.

use std::collections::BTreeMap;

use stockroom_core::ItemName;

use crate::store::Inventory;

const DELIMITER: &str = "====================";

/// Snapshot report over an inventory.
///
/// Renders a fixed frame around one `{item} -> {quantity}` line per entry:
///
/// ```text
/// ====================
/// Items Report
/// ====================
/// apple -> 7
/// ====================
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    items: BTreeMap<ItemName, i64>,
}

impl Report {
    pub fn of(inventory: &Inventory) -> Self {
        Self {
            items: inventory.snapshot(),
        }
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{DELIMITER}")?;
        writeln!(f, "Items Report")?;
        writeln!(f, "{DELIMITER}")?;
        for (item, qty) in &self.items {
            writeln!(f, "{item} -> {qty}")?;
        }
        write!(f, "{DELIMITER}")
    }
}
