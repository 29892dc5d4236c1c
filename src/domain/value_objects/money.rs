//! # Money
//!
//! Integer money in hundredths of a currency unit.
//!
//! Every price the engine touches is a non-negative integer number of
//! cents. Conversion to user-facing currency units (division by 100)
//! happens only at the system boundary, via [`Cents::to_major_units`],
//! and produces an exact [`Decimal`].
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use storefront_assembly::domain::value_objects::Cents;
//!
//! let price = Cents::new(1099);
//! assert_eq!(price.times(3), Cents::new(3297));
//! assert_eq!(price.to_major_units(), Decimal::new(1099, 2));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative monetary amount in hundredths of a currency unit.
///
/// Totals are computed with saturating arithmetic: a sum that would
/// overflow `u64` clamps at `u64::MAX` instead of wrapping or panicking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cents(u64);

impl Cents {
    /// Zero cents.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a raw cent count.
    #[inline]
    #[must_use]
    pub const fn new(cents: u64) -> Self {
        Self(cents)
    }

    /// Returns the raw cent count.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Adds two amounts, clamping at `u64::MAX` on overflow.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies the amount by an item quantity, clamping on overflow.
    #[inline]
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Converts to major currency units as an exact decimal (cents / 100).
    #[must_use]
    pub fn to_major_units(self) -> Decimal {
        Decimal::new(self.0 as i64, 2)
    }

    /// Returns the amount as a decimal cent count, for numeric algorithms
    /// that operate on real-valued prices.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Cents {
    fn from(cents: u64) -> Self {
        Self(cents)
    }
}
