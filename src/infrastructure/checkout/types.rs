//! # Checkout Wire Types
//!
//! Request and response shapes exchanged with the checkout service.
//!
//! Candidate trees submitted for simulation use the same flat
//! index-plus-binding representation as the domain [`OrderTree`]
//! (`crate::domain::entities::OrderTree`); the simulated snapshot coming
//! back carries resolved selling prices per item.

use crate::domain::value_objects::{AssemblyId, Cents, ItemId, OrderFormId, SellerId};
use serde::{Deserialize, Serialize};

/// One entry of a candidate tree submitted for simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationItem {
    /// Catalog identifier.
    pub id: ItemId,
    /// Number of units.
    pub quantity: u32,
    /// Seller offering the item.
    pub seller: SellerId,
    /// Index of the father entry within this request; `None` for the root.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_item_index: Option<usize>,
    /// Slot the entry occupies on its father; `None` for the root.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_assembly_binding: Option<AssemblyId>,
}

impl SimulationItem {
    /// Creates the root (father) entry of a candidate tree.
    #[must_use]
    pub fn root(id: ItemId, quantity: u32, seller: SellerId) -> Self {
        Self {
            id,
            quantity,
            seller,
            parent_item_index: None,
            parent_assembly_binding: None,
        }
    }

    /// Creates a child entry bound to a slot of the entry at
    /// `parent_item_index`.
    #[must_use]
    pub fn child(
        id: ItemId,
        quantity: u32,
        seller: SellerId,
        parent_item_index: usize,
        binding: AssemblyId,
    ) -> Self {
        Self {
            id,
            quantity,
            seller,
            parent_item_index: Some(parent_item_index),
            parent_assembly_binding: Some(binding),
        }
    }

    /// Returns true if the entry occupies the given slot.
    #[must_use]
    pub fn occupies_slot(&self, binding: &AssemblyId) -> bool {
        self.parent_assembly_binding.as_ref() == Some(binding)
    }
}

/// Body of a simulation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Candidate tree, root first.
    pub items: Vec<SimulationItem>,
}

impl SimulationRequest {
    /// Creates a request from a candidate tree.
    #[must_use]
    pub fn new(items: Vec<SimulationItem>) -> Self {
        Self { items }
    }
}

/// One item of a simulated or persisted order form, with its resolved
/// selling price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedItem {
    /// Catalog identifier.
    pub id: ItemId,
    /// Number of units.
    pub quantity: u32,
    /// Resolved selling price per unit, in cents.
    #[serde(default)]
    pub selling_price: Cents,
    /// Index of the father item; `None` for top-level items.
    #[serde(default)]
    pub parent_item_index: Option<usize>,
    /// Slot the item occupies on its father; `None` for top-level items.
    #[serde(default)]
    pub parent_assembly_binding: Option<AssemblyId>,
}

impl SimulatedItem {
    /// Creates a simulated item from parts (for test doubles).
    #[must_use]
    pub fn from_parts(
        id: ItemId,
        quantity: u32,
        selling_price: Cents,
        parent_item_index: Option<usize>,
        parent_assembly_binding: Option<AssemblyId>,
    ) -> Self {
        Self {
            id,
            quantity,
            selling_price,
            parent_item_index,
            parent_assembly_binding,
        }
    }
}

/// An order-form snapshot returned by the checkout service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormSnapshot {
    order_form_id: OrderFormId,
    #[serde(default)]
    items: Vec<SimulatedItem>,
}

impl OrderFormSnapshot {
    /// Creates a snapshot from parts (for test doubles).
    #[must_use]
    pub fn from_parts(order_form_id: OrderFormId, items: Vec<SimulatedItem>) -> Self {
        Self {
            order_form_id,
            items,
        }
    }

    /// Returns the order-form identifier.
    #[must_use]
    pub fn order_form_id(&self) -> &OrderFormId {
        &self.order_form_id
    }

    /// Returns the snapshot items in canonical order.
    #[must_use]
    pub fn items(&self) -> &[SimulatedItem] {
        &self.items
    }

    /// Finds the index of the first item with the given id.
    #[must_use]
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Finds the selling price of the item matching id and slot binding.
    #[must_use]
    pub fn item_price(&self, id: &ItemId, binding: &AssemblyId) -> Option<Cents> {
        self.items
            .iter()
            .find(|item| {
                &item.id == id && item.parent_assembly_binding.as_ref() == Some(binding)
            })
            .map(|item| item.selling_price)
    }
}

/// Items attached to or detached from one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionPayload {
    /// Selections for the slot.
    pub items: Vec<AssemblyOptionInput>,
}

/// One selection persisted through the assembly options endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyOptionInput {
    /// Catalog identifier of the selection.
    pub id: ItemId,
    /// Number of units.
    pub quantity: u32,
    /// Seller offering the selection.
    pub seller: SellerId,
}

impl AssemblyOptionInput {
    /// Creates a selection.
    #[must_use]
    pub fn new(id: impl Into<ItemId>, quantity: u32, seller: impl Into<SellerId>) -> Self {
        Self {
            id: id.into(),
            quantity,
            seller: seller.into(),
        }
    }
}

/// Body of an add/remove assembly options call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyOptionsBody {
    /// Selections being attached or detached.
    pub composition: CompositionPayload,
    /// Keep the father item as a single line instead of splitting per
    /// customization.
    pub no_split_item: bool,
}

impl AssemblyOptionsBody {
    /// Builds the body for attaching selections; the father line is never
    /// split.
    #[must_use]
    pub fn attaching(items: Vec<AssemblyOptionInput>) -> Self {
        Self {
            composition: CompositionPayload { items },
            no_split_item: true,
        }
    }

    /// Builds the body for detaching selections.
    #[must_use]
    pub fn detaching(items: Vec<AssemblyOptionInput>) -> Self {
        Self {
            composition: CompositionPayload { items },
            no_split_item: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn simulation_request_wire_shape() {
        let request = SimulationRequest::new(vec![
            SimulationItem::root(ItemId::new("pizza"), 1, SellerId::new("1")),
            SimulationItem::child(
                ItemId::new("olive"),
                2,
                SellerId::new("1"),
                0,
                AssemblyId::new("1_toppings"),
            ),
        ]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["items"][0]["id"], "pizza");
        assert!(json["items"][0].get("parentItemIndex").is_none());
        assert_eq!(json["items"][1]["parentItemIndex"], 0);
        assert_eq!(json["items"][1]["parentAssemblyBinding"], "1_toppings");
    }

    #[test]
    fn snapshot_item_price_matches_id_and_binding() {
        let binding = AssemblyId::new("1_toppings");
        let snapshot = OrderFormSnapshot::from_parts(
            OrderFormId::new("of-1"),
            vec![
                SimulatedItem::from_parts(ItemId::new("pizza"), 1, Cents::new(2000), None, None),
                SimulatedItem::from_parts(
                    ItemId::new("olive"),
                    1,
                    Cents::new(150),
                    Some(0),
                    Some(binding.clone()),
                ),
            ],
        );

        assert_eq!(
            snapshot.item_price(&ItemId::new("olive"), &binding),
            Some(Cents::new(150))
        );
        assert_eq!(
            snapshot.item_price(&ItemId::new("olive"), &AssemblyId::new("2_sauces")),
            None
        );
        assert_eq!(snapshot.position_of(&ItemId::new("pizza")), Some(0));
    }

    #[test]
    fn snapshot_parses_checkout_payload() {
        let payload = serde_json::json!({
            "orderFormId": "of-9",
            "items": [
                {"id": "pizza", "quantity": 1, "sellingPrice": 2000},
                {
                    "id": "olive",
                    "quantity": 2,
                    "sellingPrice": 100,
                    "parentItemIndex": 0,
                    "parentAssemblyBinding": "1_toppings"
                }
            ]
        });

        let snapshot: OrderFormSnapshot = serde_json::from_value(payload).unwrap();
        assert_eq!(snapshot.order_form_id().as_str(), "of-9");
        assert_eq!(snapshot.items().len(), 2);
    }

    #[test]
    fn assembly_body_sets_no_split_item() {
        let body =
            AssemblyOptionsBody::attaching(vec![AssemblyOptionInput::new("olive", 1, "1")]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["noSplitItem"], true);
        assert_eq!(json["composition"]["items"][0]["id"], "olive");
    }
}
