//! # Storefront Assembly Engine
//!
//! Product-customization ("assembly option") resolution and pricing engine
//! for a storefront commerce BFF.
//!
//! A cart line item can carry nested, constrained sub-selections (toppings,
//! engravings, bundle parts). This crate reconstructs the current selection
//! tree from a flat order-form snapshot, simulates the price impact of a
//! prospective selection under slot cardinality rules, aggregates selling
//! prices recursively across the tree, and commits batches of selections
//! tolerating partial failure.
//!
//! ## Architecture
//!
//! The crate is layered:
//!
//! - [`domain`]: value objects, entities and pure services (price inversion,
//!   subtree price aggregation). No I/O.
//! - [`application`]: orchestration services (composition simulation, batch
//!   commit) over pluggable collaborator ports.
//! - [`infrastructure`]: the outbound checkout gateway (HTTP adapter, wire
//!   DTOs, error taxonomy).
//! - [`config`]: engine settings loaded from the environment.
//!
//! The engine is stateless: every operation recomputes from a snapshot handed
//! in by the external checkout service, which is the single source of truth
//! and the only mutation point.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_assembly::application::services::CompositionSimulator;
//! use storefront_assembly::config::Settings;
//! use storefront_assembly::infrastructure::checkout::HttpCheckoutGateway;
//!
//! let settings = Settings::from_env()?;
//! let gateway = Arc::new(HttpCheckoutGateway::new(&settings)?);
//! let simulator = CompositionSimulator::new(gateway, classifier);
//! let price = simulator
//!     .resolve_option_price(&father, &offerings, &option, &item)
//!     .await?;
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
