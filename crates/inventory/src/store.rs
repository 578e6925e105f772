//! The inventory store: an ordered mapping from item name to quantity.

use std::collections::BTreeMap;
use std::sync::Arc;

use stockroom_core::{ItemName, StockError, StockResult};

use crate::audit::{AuditEntry, AuditSink, NoopSink};

/// Threshold used by [`Inventory::low_items_default`].
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of a removal.
///
/// Removal never fails: a missing item is an inspectable outcome, not an
/// error, and over-removal clamps by deleting the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock decremented; the entry remains with `remaining` units.
    Removed { remaining: i64 },
    /// The removal drove the quantity to zero or below; the entry is gone.
    Depleted,
    /// No such item; the mapping is unchanged.
    NotFound,
}

/// In-memory inventory: item name -> quantity.
///
/// Quantities are never negative. Iteration order is the map's natural
/// (lexicographic) order, which makes reports and low-stock listings
/// deterministic. Plain owned state, single-threaded by design.
pub struct Inventory {
    items: BTreeMap<ItemName, i64>,
    audit: Arc<dyn AuditSink>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Inventory").field("items", &self.items).finish()
    }
}

impl Inventory {
    /// Empty inventory with a no-op audit sink.
    pub fn new() -> Self {
        Self::with_audit(Arc::new(NoopSink))
    }

    /// Empty inventory recording mutations to `audit`.
    pub fn with_audit(audit: Arc<dyn AuditSink>) -> Self {
        Self {
            items: BTreeMap::new(),
            audit,
        }
    }

    /// Increment (or initialize) the quantity for `item` by `qty`.
    ///
    /// Returns the new quantity. A delta that would make the stored quantity
    /// negative is rejected and leaves the mapping unchanged; negative deltas
    /// that keep the quantity at or above zero are accepted as corrections.
    pub fn add(&mut self, item: &ItemName, qty: i64) -> StockResult<i64> {
        let current = self.quantity(item);
        let updated = current.checked_add(qty).ok_or_else(|| {
            StockError::invariant(format!("quantity overflow for '{item}'"))
        })?;
        if updated < 0 {
            return Err(StockError::invariant(format!(
                "stock for '{item}' cannot go negative (have {current}, delta {qty})"
            )));
        }

        self.items.insert(item.clone(), updated);
        self.audit.record(AuditEntry::added(item, qty));
        Ok(updated)
    }

    /// Decrement the quantity for `item` by `qty`.
    ///
    /// Deletes the entry when the result would be zero or below.
    pub fn remove(&mut self, item: &ItemName, qty: i64) -> RemoveOutcome {
        let Some(current) = self.items.get(item).copied() else {
            return RemoveOutcome::NotFound;
        };

        // A delta that overflows the subtraction clamps like any over-removal.
        match current.checked_sub(qty) {
            Some(remaining) if remaining > 0 => {
                self.items.insert(item.clone(), remaining);
                self.audit.record(AuditEntry::removed(item, qty));
                RemoveOutcome::Removed { remaining }
            }
            _ => {
                self.items.remove(item);
                self.audit.record(AuditEntry::removed(item, qty));
                RemoveOutcome::Depleted
            }
        }
    }

    /// Current quantity for `item`; zero when absent.
    pub fn quantity(&self, item: &ItemName) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Items with quantity strictly below `threshold`, in mapping order.
    pub fn low_items(&self, threshold: i64) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// [`Inventory::low_items`] with [`DEFAULT_LOW_STOCK_THRESHOLD`].
    pub fn low_items_default(&self) -> Vec<ItemName> {
        self.low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    }

    /// Replace the whole mapping (used when loading from disk).
    pub fn replace(&mut self, items: BTreeMap<ItemName, i64>) {
        self.items = items;
    }

    /// Read access to the mapping, in natural order.
    pub fn items(&self) -> impl Iterator<Item = (&ItemName, i64)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    /// Owned copy of the mapping.
    pub fn snapshot(&self) -> BTreeMap<ItemName, i64> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemorySink;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    #[test]
    fn add_initializes_then_accumulates() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        assert_eq!(inv.add(&apple, 10).unwrap(), 10);
        assert_eq!(inv.add(&apple, 5).unwrap(), 15);
        assert_eq!(inv.quantity(&apple), 15);
    }

    #[test]
    fn add_rejects_delta_that_goes_negative() {
        let mut inv = Inventory::new();
        let banana = name("banana");

        let err = inv.add(&banana, -2).unwrap_err();
        match err {
            StockError::InvariantViolation(_) => {}
            _ => panic!("Expected invariant violation for negative result"),
        }
        assert!(inv.is_empty());
        assert_eq!(inv.quantity(&banana), 0);
    }

    #[test]
    fn add_accepts_negative_correction_within_stock() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        inv.add(&apple, 10).unwrap();
        assert_eq!(inv.add(&apple, -4).unwrap(), 6);
        assert_eq!(inv.quantity(&apple), 6);
    }

    #[test]
    fn remove_decrements_and_reports_remaining() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        inv.add(&apple, 10).unwrap();
        let outcome = inv.remove(&apple, 3);
        assert_eq!(outcome, RemoveOutcome::Removed { remaining: 7 });
        assert_eq!(inv.quantity(&apple), 7);
    }

    #[test]
    fn remove_missing_item_leaves_mapping_unchanged() {
        let mut inv = Inventory::new();
        let apple = name("apple");
        inv.add(&apple, 10).unwrap();

        let outcome = inv.remove(&name("orange"), 1);
        assert_eq!(outcome, RemoveOutcome::NotFound);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.quantity(&apple), 10);
    }

    #[test]
    fn remove_to_zero_deletes_entry() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        inv.add(&apple, 3).unwrap();
        assert_eq!(inv.remove(&apple, 3), RemoveOutcome::Depleted);
        assert!(inv.is_empty());
        assert_eq!(inv.quantity(&apple), 0);
    }

    #[test]
    fn remove_with_extreme_delta_clamps_instead_of_overflowing() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        inv.add(&apple, 1).unwrap();
        assert_eq!(inv.remove(&apple, i64::MIN), RemoveOutcome::Depleted);
        assert_eq!(inv.quantity(&apple), 0);
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_past_zero_deletes_entry() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        inv.add(&apple, 3).unwrap();
        assert_eq!(inv.remove(&apple, 10), RemoveOutcome::Depleted);
        assert_eq!(inv.quantity(&apple), 0);
    }

    #[test]
    fn low_items_returns_exactly_items_below_threshold() {
        let mut inv = Inventory::new();
        inv.add(&name("apple"), 7).unwrap();
        inv.add(&name("banana"), 3).unwrap();

        let low = inv.low_items(5);
        assert_eq!(low, vec![name("banana")]);
    }

    #[test]
    fn low_items_excludes_exact_threshold() {
        let mut inv = Inventory::new();
        inv.add(&name("apple"), 5).unwrap();

        assert!(inv.low_items_default().is_empty());
    }

    #[test]
    fn low_items_in_mapping_order() {
        let mut inv = Inventory::new();
        inv.add(&name("pear"), 1).unwrap();
        inv.add(&name("apple"), 2).unwrap();
        inv.add(&name("mango"), 9).unwrap();

        assert_eq!(inv.low_items(5), vec![name("apple"), name("pear")]);
    }

    #[test]
    fn scenario_add_then_remove_leaves_expected_quantity() {
        let mut inv = Inventory::new();
        let apple = name("apple");

        inv.add(&apple, 10).unwrap();
        inv.remove(&apple, 3);
        assert_eq!(inv.quantity(&apple), 7);
    }

    #[test]
    fn mutations_record_audit_entries() {
        let sink = Arc::new(MemorySink::new());
        let mut inv = Inventory::with_audit(sink.clone());
        let apple = name("apple");

        inv.add(&apple, 10).unwrap();
        inv.remove(&apple, 3);
        inv.remove(&name("orange"), 1); // not found, no entry

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "Added 10 of apple");
        assert_eq!(entries[1].message, "Removed 3 of apple");
    }

    #[test]
    fn rejected_add_records_no_audit_entry() {
        let sink = Arc::new(MemorySink::new());
        let mut inv = Inventory::with_audit(sink.clone());

        let _ = inv.add(&name("banana"), -2);
        assert!(sink.is_empty());
    }

    #[test]
    fn replace_swaps_in_whole_mapping() {
        let mut inv = Inventory::new();
        inv.add(&name("apple"), 1).unwrap();

        let mut items = BTreeMap::new();
        items.insert(name("mango"), 4);
        inv.replace(items);

        assert_eq!(inv.quantity(&name("apple")), 0);
        assert_eq!(inv.quantity(&name("mango")), 4);
        assert_eq!(inv.len(), 1);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: two successful adds accumulate exactly.
            #[test]
            fn adds_accumulate(q1 in 0i64..1_000_000, q2 in 0i64..1_000_000) {
                let mut inv = Inventory::new();
                let apple = name("apple");

                inv.add(&apple, q1).unwrap();
                inv.add(&apple, q2).unwrap();
                prop_assert_eq!(inv.quantity(&apple), q1 + q2);
            }

            /// Property: quantities never go negative under arbitrary
            /// add/remove interleavings.
            #[test]
            fn stock_never_negative(
                ops in prop::collection::vec((0u8..2, 0i64..100), 1..40)
            ) {
                let mut inv = Inventory::new();
                let apple = name("apple");

                for (op, qty) in ops {
                    if op == 0 {
                        let _ = inv.add(&apple, qty);
                    } else {
                        let _ = inv.remove(&apple, qty);
                    }
                    prop_assert!(inv.quantity(&apple) >= 0);
                }
            }

            /// Property: low_items partitions the mapping by threshold.
            #[test]
            fn low_items_matches_filter(
                quantities in prop::collection::btree_map("[a-z]{1,8}", 0i64..20, 0..10),
                threshold in 0i64..20
            ) {
                let mut inv = Inventory::new();
                for (item, qty) in &quantities {
                    inv.add(&name(item), *qty).unwrap();
                }

                let low = inv.low_items(threshold);
                for (item, qty) in inv.items() {
                    let flagged = low.contains(item);
                    prop_assert_eq!(flagged, qty < threshold);
                }
                prop_assert!(low.len() <= inv.len());
            }
        }
    }
}
