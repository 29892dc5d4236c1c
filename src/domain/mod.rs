//! # Domain Layer
//!
//! Pure business types and computations. No I/O happens here: every
//! operation works over an order-form snapshot handed in by the caller.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
