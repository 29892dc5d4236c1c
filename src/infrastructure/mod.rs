//! # Infrastructure Layer
//!
//! Adapters for external collaborators. The only infrastructure this
//! engine owns is the outbound checkout gateway.

pub mod checkout;
