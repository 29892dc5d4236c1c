//! # Assembly Options
//!
//! Customization slots declared on a line item and their cardinality rules.
//!
//! An [`AssemblyOptionOffering`] is a named slot (toppings, engraving, bundle
//! part). Its [`Composition`] carries slot-wide quantity bounds and the set
//! of candidate [`CompositionItem`]s; a slot without a composition is
//! informational only.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{AssemblyId, ItemId, PriceTableId, SellerId};
use serde::{Deserialize, Serialize};

/// A candidate item selectable inside a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionItem {
    /// Catalog identifier of the candidate.
    pub id: ItemId,
    /// Seller offering the candidate.
    pub seller: SellerId,
    /// Price table used to price the candidate inside this slot.
    #[serde(default)]
    pub price_table: Option<PriceTableId>,
    /// Per-item lower quantity bound.
    pub min_quantity: u32,
    /// Per-item upper quantity bound.
    pub max_quantity: u32,
    /// Quantity attached in the default (basic) configuration; zero means
    /// the candidate is not part of the basic tree.
    #[serde(default)]
    pub initial_quantity: u32,
}

impl CompositionItem {
    /// Creates a candidate with equal quantity bounds semantics left to the
    /// caller and no initial attachment.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        seller: impl Into<SellerId>,
        min_quantity: u32,
        max_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            seller: seller.into(),
            price_table: None,
            min_quantity,
            max_quantity,
            initial_quantity: 0,
        }
    }

    /// Sets the quantity attached in the basic configuration.
    #[must_use]
    pub fn with_initial_quantity(mut self, initial_quantity: u32) -> Self {
        self.initial_quantity = initial_quantity;
        self
    }

    /// Sets the price table.
    #[must_use]
    pub fn with_price_table(mut self, price_table: PriceTableId) -> Self {
        self.price_table = Some(price_table);
        self
    }

    /// Returns true if the candidate may be removed entirely from its slot.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.min_quantity == 0
    }

    /// Validates that the bounds are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBounds`] if `min_quantity` exceeds
    /// `max_quantity`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.min_quantity > self.max_quantity {
            return Err(DomainError::invalid_bounds(
                "composition item",
                self.min_quantity,
                self.max_quantity,
            ));
        }
        Ok(())
    }
}

/// Cardinality rules and candidate set for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Slot-wide lower bound on the summed occupant quantity.
    pub min_quantity: u32,
    /// Slot-wide upper bound on the summed occupant quantity.
    pub max_quantity: u32,
    /// Candidate items selectable in this slot.
    pub items: Vec<CompositionItem>,
}

impl Composition {
    /// Creates a composition from bounds and candidates.
    #[must_use]
    pub fn new(min_quantity: u32, max_quantity: u32, items: Vec<CompositionItem>) -> Self {
        Self {
            min_quantity,
            max_quantity,
            items,
        }
    }

    /// Finds a candidate by item id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&CompositionItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Validates the slot bounds and every candidate's bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBounds`] on the first inconsistent
    /// min/max pair.
    pub fn validate(&self) -> DomainResult<()> {
        if self.min_quantity > self.max_quantity {
            return Err(DomainError::invalid_bounds(
                "composition",
                self.min_quantity,
                self.max_quantity,
            ));
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}

/// A named customization slot declared on a line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyOptionOffering {
    /// Slot identifier; children bind to it via `parentAssemblyBinding`.
    pub id: AssemblyId,
    /// Human-readable slot name.
    pub name: String,
    /// Cardinality rules and candidates; `None` for informational slots.
    #[serde(default)]
    pub composition: Option<Composition>,
}

impl AssemblyOptionOffering {
    /// Creates a selectable slot.
    #[must_use]
    pub fn new(id: impl Into<AssemblyId>, name: impl Into<String>, composition: Composition) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            composition: Some(composition),
        }
    }

    /// Creates an informational slot with no selectable sub-items.
    #[must_use]
    pub fn informational(id: impl Into<AssemblyId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            composition: None,
        }
    }

    /// Returns true if the slot has no selectable sub-items.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        self.composition.is_none()
    }

    /// Finds a candidate of this slot by item id.
    #[must_use]
    pub fn composition_item(&self, id: &ItemId) -> Option<&CompositionItem> {
        self.composition.as_ref().and_then(|c| c.item(id))
    }
}
