//! # Domain Entities
//!
//! Entities representing the order-form snapshot the engine computes over.
//!
//! ## Entities
//!
//! - [`LineItem`]: uniform father/child order-form item
//! - [`AssemblyOptionOffering`]: a named customization slot
//! - [`Composition`] / [`CompositionItem`]: slot cardinality rules and
//!   candidates
//! - [`OrderTree`]: flat arena with index-based parent/child relations

pub mod assembly_option;
pub mod line_item;
pub mod order_tree;

pub use assembly_option::{AssemblyOptionOffering, Composition, CompositionItem};
pub use line_item::LineItem;
pub use order_tree::OrderTree;
