//! # Application Services
//!
//! Use-case orchestration over the domain and the checkout gateway.
//!
//! - [`composition_simulator`]: prospective-selection pricing through
//!   checkout simulation (the read path)
//! - [`batch_commit`]: best-effort persistence of confirmed selections
//!   (the write path)

pub mod batch_commit;
pub mod composition_simulator;

pub use batch_commit::{
    AssemblySelection, ItemSelections, OptionsDiffProvider, SelectionCommitter,
};
pub use composition_simulator::{ByNameClassifier, ChoiceClassifier, CompositionSimulator};
