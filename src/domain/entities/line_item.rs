//! # Line Item
//!
//! Uniform representation for order-form items.
//!
//! Both top-level ("father") items and nested ("child") sub-selections share
//! this shape. A child is attached to its father through
//! `parent_item_index` (an index into the owning tree's flat item list) and
//! `parent_assembly_binding` (the slot it occupies), never through pointers.

use crate::domain::value_objects::{AssemblyId, Cents, ItemId, SellerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One item of an order-form snapshot.
///
/// Built with chained setters; the constructor covers the identity fields
/// every item has, the setters the optional pricing and attachment fields.
///
/// # Examples
///
/// ```
/// use storefront_assembly::domain::entities::LineItem;
/// use storefront_assembly::domain::value_objects::{AssemblyId, Cents};
///
/// let topping = LineItem::new("2000024", 2, "1")
///     .with_selling_price(Cents::new(350))
///     .with_parent(0, AssemblyId::new("1_basic_toppings"));
/// assert_eq!(topping.parent_item_index, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog identifier (SKU id).
    pub id: ItemId,
    /// Number of units of this item.
    pub quantity: u32,
    /// Seller offering the item.
    pub seller: SellerId,
    /// Conversion factor between one quantity unit and its billable
    /// measure (for example weight). Non-negative; one for discrete items.
    #[serde(default = "default_unit_multiplier")]
    pub unit_multiplier: Decimal,
    /// Catalog unit price.
    #[serde(default)]
    pub price: Cents,
    /// List (reference) unit price.
    #[serde(default)]
    pub list_price: Cents,
    /// Effective unit price after promotions, as resolved by the checkout
    /// service.
    #[serde(default)]
    pub selling_price: Cents,
    /// Index of the father item in the owning tree's flat list; `None` for
    /// top-level items.
    #[serde(default)]
    pub parent_item_index: Option<usize>,
    /// Slot this item occupies on its father; `None` for top-level items.
    #[serde(default)]
    pub parent_assembly_binding: Option<AssemblyId>,
}

fn default_unit_multiplier() -> Decimal {
    Decimal::ONE
}

impl LineItem {
    /// Creates a top-level item with unit multiplier 1 and zero prices.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, quantity: u32, seller: impl Into<SellerId>) -> Self {
        Self {
            id: id.into(),
            quantity,
            seller: seller.into(),
            unit_multiplier: Decimal::ONE,
            price: Cents::ZERO,
            list_price: Cents::ZERO,
            selling_price: Cents::ZERO,
            parent_item_index: None,
            parent_assembly_binding: None,
        }
    }

    /// Attaches the item to a father item and slot.
    #[must_use]
    pub fn with_parent(mut self, parent_item_index: usize, binding: AssemblyId) -> Self {
        self.parent_item_index = Some(parent_item_index);
        self.parent_assembly_binding = Some(binding);
        self
    }

    /// Sets catalog, list and selling prices at once.
    #[must_use]
    pub fn with_prices(mut self, price: Cents, list_price: Cents, selling_price: Cents) -> Self {
        self.price = price;
        self.list_price = list_price;
        self.selling_price = selling_price;
        self
    }

    /// Sets the selling price only.
    #[must_use]
    pub fn with_selling_price(mut self, selling_price: Cents) -> Self {
        self.selling_price = selling_price;
        self
    }

    /// Sets the unit multiplier.
    #[must_use]
    pub fn with_unit_multiplier(mut self, unit_multiplier: Decimal) -> Self {
        self.unit_multiplier = unit_multiplier;
        self
    }

    /// Returns true for items without a father.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent_item_index.is_none()
    }

    /// Returns true if this item is a direct child of the item at
    /// `father_index`.
    #[must_use]
    pub fn is_child_of(&self, father_index: usize) -> bool {
        self.parent_item_index == Some(father_index)
    }

    /// Returns true if this item occupies the given slot on the item at
    /// `father_index`.
    #[must_use]
    pub fn occupies_slot(&self, father_index: usize, binding: &AssemblyId) -> bool {
        self.is_child_of(father_index) && self.parent_assembly_binding.as_ref() == Some(binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_top_level() {
        let item = LineItem::new("100", 1, "1");
        assert!(item.is_top_level());
        assert_eq!(item.unit_multiplier, Decimal::ONE);
        assert_eq!(item.selling_price, Cents::ZERO);
    }

    #[test]
    fn with_parent_attaches_to_slot() {
        let binding = AssemblyId::new("2_sauces");
        let child = LineItem::new("200", 1, "1").with_parent(0, binding.clone());
        assert!(!child.is_top_level());
        assert!(child.is_child_of(0));
        assert!(!child.is_child_of(1));
        assert!(child.occupies_slot(0, &binding));
        assert!(!child.occupies_slot(0, &AssemblyId::new("3_extras")));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let item = LineItem::new("100", 1, "1")
            .with_selling_price(Cents::new(990))
            .with_parent(0, AssemblyId::new("1_add_on"));
        let json = serde_json::to_string(&item).unwrap_or_default();
        assert!(json.contains("\"sellingPrice\":990"));
        assert!(json.contains("\"parentItemIndex\":0"));
        assert!(json.contains("\"parentAssemblyBinding\":\"1_add_on\""));
    }
}
