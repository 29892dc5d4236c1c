//! # Domain Services
//!
//! Domain services encapsulating computations that don't naturally belong
//! to a single entity or value object.
//!
//! ## Services
//!
//! - [`price_inversion::calculate_price`]: fractional unit price recovery
//!   from a truncated integer total
//! - [`tree_price::subtree_total`]: recursive selling-price aggregation
//!   over the flat order tree

pub mod price_inversion;
pub mod tree_price;

pub use price_inversion::calculate_price;
pub use tree_price::{subtree_total, unit_price, PositionLookup, ScanPositionLookup};
