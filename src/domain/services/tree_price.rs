//! # Tree Price Aggregation
//!
//! Recursive summation of selling prices across a father/child item tree.
//!
//! The order tree is a flat list; direct children are found by scanning for
//! a matching `parent_item_index`. Because parent indices are unique per
//! tree position, children claimed at one level are excluded from deeper
//! recursion by the parent-index filter itself; the `remaining` bookkeeping
//! only narrows the scan.
//!
//! The index a child recurses under comes from the [`PositionLookup`] port
//! over the authoritative snapshot, not from the child's position in the
//! working slice.

use crate::domain::entities::{LineItem, OrderTree};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Cents;
use rust_decimal::Decimal;

/// Port locating an item's index within the canonical order-form item list.
pub trait PositionLookup: Send + Sync {
    /// Returns the index of `item` in `tree`, or `None` if absent.
    fn position_of(&self, item: &LineItem, tree: &OrderTree) -> Option<usize>;
}

/// Default lookup scanning the tree for a matching id and parent binding.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanPositionLookup;

impl PositionLookup for ScanPositionLookup {
    fn position_of(&self, item: &LineItem, tree: &OrderTree) -> Option<usize> {
        tree.items().iter().position(|candidate| {
            candidate.id == item.id
                && candidate.parent_item_index == item.parent_item_index
                && candidate.parent_assembly_binding == item.parent_assembly_binding
        })
    }
}

/// Sums the selling prices of a father item and its whole subtree, in cents.
///
/// `all_other_items` is the set of items that may still be claimed as
/// descendants; callers pass every tree item except the father itself.
///
/// # Errors
///
/// Returns [`DomainError::ItemNotInTree`] when a claimed child cannot be
/// located in the authoritative snapshot by the lookup.
pub fn subtree_total(
    all_other_items: &[LineItem],
    father_index: usize,
    father: &LineItem,
    tree: &OrderTree,
    lookup: &dyn PositionLookup,
) -> DomainResult<Cents> {
    let candidates: Vec<&LineItem> = all_other_items.iter().collect();
    subtree_total_inner(&candidates, father_index, father, tree, lookup)
}

fn subtree_total_inner(
    all_other_items: &[&LineItem],
    father_index: usize,
    father: &LineItem,
    tree: &OrderTree,
    lookup: &dyn PositionLookup,
) -> DomainResult<Cents> {
    let mut total = father.selling_price.times(father.quantity);

    let (children, remaining): (Vec<&LineItem>, Vec<&LineItem>) = all_other_items
        .iter()
        .copied()
        .partition(|item| item.is_child_of(father_index));

    for child in children {
        let child_index = lookup
            .position_of(child, tree)
            .ok_or_else(|| DomainError::item_not_in_tree(child.id.clone()))?;
        let child_total = subtree_total_inner(&remaining, child_index, child, tree, lookup)?;
        total = total.saturating_add(child_total);
    }

    Ok(total)
}

/// Per-unit price exposed to callers: the subtree total divided by the
/// father quantity, in major currency units.
///
/// # Errors
///
/// Returns [`DomainError::ZeroQuantity`] when the father quantity is zero.
pub fn unit_price(father: &LineItem, total: Cents) -> DomainResult<Decimal> {
    if father.quantity == 0 {
        return Err(DomainError::ZeroQuantity(father.id.clone()));
    }
    Ok(total.to_decimal() / Decimal::from(father.quantity) / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AssemblyId;

    fn tree_and_others(items: Vec<LineItem>) -> (OrderTree, Vec<LineItem>) {
        let tree = OrderTree::new(items);
        let others = tree.items().iter().skip(1).cloned().collect();
        (tree, others)
    }

    #[test]
    fn childless_father_is_price_times_quantity() {
        let father = LineItem::new("pizza", 3, "1").with_selling_price(Cents::new(2000));
        let (tree, others) = tree_and_others(vec![father.clone()]);

        let total = subtree_total(&others, 0, &father, &tree, &ScanPositionLookup).unwrap();
        assert_eq!(total, Cents::new(6000));
    }

    #[test]
    fn father_with_one_child_sums_both() {
        let binding = AssemblyId::new("1_toppings");
        let father = LineItem::new("pizza", 1, "1").with_selling_price(Cents::new(2000));
        let child = LineItem::new("olive", 1, "1")
            .with_selling_price(Cents::new(150))
            .with_parent(0, binding);
        let (tree, others) = tree_and_others(vec![father.clone(), child]);

        let total = subtree_total(&others, 0, &father, &tree, &ScanPositionLookup).unwrap();
        assert_eq!(total, Cents::new(2150));
        assert_eq!(
            unit_price(&father, total).unwrap(),
            Decimal::new(2150, 0) / Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn nested_grandchildren_are_aggregated() {
        let combo = AssemblyId::new("1_combo");
        let toppings = AssemblyId::new("1_toppings");
        let father = LineItem::new("combo", 1, "1").with_selling_price(Cents::new(3000));
        let pizza = LineItem::new("pizza", 1, "1")
            .with_selling_price(Cents::new(2000))
            .with_parent(0, combo);
        let olive = LineItem::new("olive", 2, "1")
            .with_selling_price(Cents::new(100))
            .with_parent(1, toppings);
        let (tree, others) = tree_and_others(vec![father.clone(), pizza, olive]);

        let total = subtree_total(&others, 0, &father, &tree, &ScanPositionLookup).unwrap();
        assert_eq!(total, Cents::new(3000 + 2000 + 200));
    }

    #[test]
    fn sibling_subtrees_do_not_claim_each_other() {
        let combo = AssemblyId::new("1_combo");
        let father = LineItem::new("combo", 1, "1").with_selling_price(Cents::ZERO);
        let left = LineItem::new("pizza", 1, "1")
            .with_selling_price(Cents::new(2000))
            .with_parent(0, combo.clone());
        let right = LineItem::new("soda", 1, "1")
            .with_selling_price(Cents::new(500))
            .with_parent(0, combo);
        let (tree, others) = tree_and_others(vec![father.clone(), left, right]);

        let total = subtree_total(&others, 0, &father, &tree, &ScanPositionLookup).unwrap();
        assert_eq!(total, Cents::new(2500));
    }

    #[test]
    fn missing_child_position_fails_loud() {
        struct NoPositions;
        impl PositionLookup for NoPositions {
            fn position_of(&self, _item: &LineItem, _tree: &OrderTree) -> Option<usize> {
                None
            }
        }

        let binding = AssemblyId::new("1_toppings");
        let father = LineItem::new("pizza", 1, "1").with_selling_price(Cents::new(2000));
        let child = LineItem::new("olive", 1, "1")
            .with_selling_price(Cents::new(150))
            .with_parent(0, binding);
        let (tree, others) = tree_and_others(vec![father.clone(), child]);

        let result = subtree_total(&others, 0, &father, &tree, &NoPositions);
        assert!(matches!(result, Err(DomainError::ItemNotInTree(_))));
    }

    #[test]
    fn unit_price_rejects_zero_quantity() {
        let father = LineItem::new("pizza", 0, "1");
        assert!(matches!(
            unit_price(&father, Cents::new(100)),
            Err(DomainError::ZeroQuantity(_))
        ));
    }
}
