//! # Order Tree
//!
//! Flat arena of line items with index-based parent/child relations.
//!
//! The checkout service models an order as an ordered flat list; the
//! parent/child relation is carried per item as
//! `(parent_item_index, parent_assembly_binding)`, not as nested
//! structures. Any traversal locates a node's children by scanning for a
//! matching parent index, and downstream price aggregation depends on that
//! contract, so this type deliberately exposes scan-based accessors rather
//! than materializing a node graph.

use crate::domain::entities::line_item::LineItem;
use crate::domain::value_objects::{AssemblyId, ItemId};
use serde::{Deserialize, Serialize};

/// A flat, ordered order-form item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderTree {
    items: Vec<LineItem>,
}

impl OrderTree {
    /// Creates a tree from an ordered item list.
    #[must_use]
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Returns the flat item list in canonical order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the item at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LineItem> {
        self.items.get(index)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the tree holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the index of the first item with the given id.
    #[must_use]
    pub fn position_of_id(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Iterates over top-level (father) items with their indices.
    pub fn fathers(&self) -> impl Iterator<Item = (usize, &LineItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_top_level())
    }

    /// Iterates over direct children of the item at `father_index`.
    pub fn children_of(&self, father_index: usize) -> impl Iterator<Item = &LineItem> {
        self.items
            .iter()
            .filter(move |item| item.is_child_of(father_index))
    }

    /// Iterates over the occupants of one slot of the item at
    /// `father_index`.
    pub fn slot_occupants<'a>(
        &'a self,
        father_index: usize,
        binding: &'a AssemblyId,
    ) -> impl Iterator<Item = &'a LineItem> {
        self.items
            .iter()
            .filter(move |item| item.occupies_slot(father_index, binding))
    }

    /// Sums the occupant quantities of one slot.
    #[must_use]
    pub fn slot_quantity(&self, father_index: usize, binding: &AssemblyId) -> u32 {
        self.slot_occupants(father_index, binding)
            .map(|item| item.quantity)
            .sum()
    }
}

impl From<Vec<LineItem>> for OrderTree {
    fn from(items: Vec<LineItem>) -> Self {
        Self::new(items)
    }
}
