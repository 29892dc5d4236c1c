//! # Application Layer
//!
//! Use cases coordinating domain services with the checkout gateway, and
//! the engine-level error taxonomy.

pub mod error;
pub mod services;

pub use error::{EngineError, EngineResult};
