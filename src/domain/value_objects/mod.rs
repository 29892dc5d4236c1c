//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ItemId`], [`SellerId`]: catalog identifiers
//! - [`AssemblyId`]: assembly option slot binding
//! - [`OrderFormId`], [`PriceTableId`]: checkout and pricing identifiers
//!
//! ## Numeric Types
//!
//! - [`Cents`]: integer money in hundredths of a currency unit
//!
//! ## Domain Enums
//!
//! - [`ChoiceType`]: SINGLE / TOGGLE / MULTIPLE slot reconciliation

pub mod choice_type;
pub mod ids;
pub mod money;

pub use choice_type::ChoiceType;
pub use ids::{AssemblyId, ItemId, OrderFormId, PriceTableId, SellerId};
pub use money::Cents;
