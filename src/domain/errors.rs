//! # Domain Errors
//!
//! Error types for pure domain computations.
//!
//! These errors represent violated numeric preconditions and malformed
//! snapshots; they carry no infrastructure context.
//!
//! # Examples
//!
//! ```
//! use storefront_assembly::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_bounds("composition", 3, 1);
//! assert!(err.to_string().contains("composition"));
//! ```

use crate::domain::value_objects::ItemId;
use thiserror::Error;

/// Error type for domain computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A unit multiplier of zero was passed to the price inversion; the
    /// admissible price interval is undefined.
    #[error("unit multiplier must not be zero")]
    ZeroUnitMultiplier,

    /// A unit multiplier below zero was passed to the price inversion.
    #[error("unit multiplier must not be negative")]
    NegativeUnitMultiplier,

    /// A quantity of zero where a per-unit price was requested.
    #[error("quantity must not be zero for item {0}")]
    ZeroQuantity(ItemId),

    /// A min/max pair where min exceeds max.
    #[error("invalid bounds for {context}: min {min} exceeds max {max}")]
    InvalidBounds {
        /// What the bounds belong to (slot or composition item).
        context: &'static str,
        /// The declared minimum.
        min: u32,
        /// The declared maximum.
        max: u32,
    },

    /// An item referenced during traversal is absent from the canonical
    /// order-form item list.
    #[error("item {0} not present in the order tree")]
    ItemNotInTree(ItemId),
}

impl DomainError {
    /// Creates an invalid-bounds error.
    #[must_use]
    pub fn invalid_bounds(context: &'static str, min: u32, max: u32) -> Self {
        Self::InvalidBounds { context, min, max }
    }

    /// Creates an item-not-in-tree error.
    #[must_use]
    pub fn item_not_in_tree(id: ItemId) -> Self {
        Self::ItemNotInTree(id)
    }

    /// Returns true if the error stems from a malformed snapshot rather
    /// than from the caller's arguments.
    #[must_use]
    pub fn is_snapshot_error(&self) -> bool {
        matches!(self, Self::ItemNotInTree(_))
    }
}

/// Result type for domain computations.
pub type DomainResult<T> = Result<T, DomainError>;
