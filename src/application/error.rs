//! # Application Errors
//!
//! Error types for the orchestration layer.
//!
//! These wrap domain and checkout failures with the context of a use case.
//! The read path (price resolution) propagates them; the write path
//! (batch commit) swallows checkout failures per group instead.
//!
//! # Examples
//!
//! ```
//! use storefront_assembly::application::error::EngineError;
//! use storefront_assembly::domain::errors::DomainError;
//!
//! let err: EngineError = DomainError::ZeroUnitMultiplier.into();
//! assert!(!err.is_retryable());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{AssemblyId, ItemId};
use crate::infrastructure::checkout::CheckoutError;
use thiserror::Error;

/// Error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Domain computation failure.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Checkout service failure.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// The simulated order form did not contain the item whose price was
    /// requested.
    #[error("item {id} (slot {binding}) missing from simulation result")]
    ItemNotInSimulation {
        /// The composition item id.
        id: ItemId,
        /// The slot binding the item was submitted under.
        binding: AssemblyId,
    },

    /// Input validation failure.
    #[error("validation error: {0}")]
    Validation(String),
}

impl EngineError {
    /// Creates an item-not-in-simulation error.
    #[must_use]
    pub fn item_not_in_simulation(id: ItemId, binding: AssemblyId) -> Self {
        Self::ItemNotInSimulation { id, binding }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Checkout(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_domain_error() {
        let err: EngineError = DomainError::ZeroUnitMultiplier.into();
        assert!(err.to_string().contains("unit multiplier"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn retryability_delegates_to_checkout() {
        let err: EngineError = CheckoutError::timeout("slow").into();
        assert!(err.is_retryable());

        let err: EngineError = CheckoutError::invalid_request("bad tree").into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn item_not_in_simulation_names_the_slot() {
        let err = EngineError::item_not_in_simulation(
            ItemId::new("olive"),
            AssemblyId::new("1_toppings"),
        );
        assert!(err.to_string().contains("olive"));
        assert!(err.to_string().contains("1_toppings"));
    }
}
