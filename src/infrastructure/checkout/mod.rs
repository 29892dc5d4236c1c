//! # Checkout Integration
//!
//! Outbound integration with the external checkout service.
//!
//! ## Modules
//!
//! - [`gateway`]: the [`CheckoutGateway`] port and its HTTP adapter
//! - [`types`]: request/response wire shapes
//! - [`http_client`]: reqwest wrapper with error mapping
//! - [`error`]: checkout error taxonomy

pub mod error;
pub mod gateway;
pub mod http_client;
pub mod types;

pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{CheckoutGateway, HttpCheckoutGateway};
pub use http_client::HttpClient;
pub use types::{
    AssemblyOptionInput, AssemblyOptionsBody, CompositionPayload, OrderFormSnapshot,
    SimulatedItem, SimulationItem, SimulationRequest,
};
