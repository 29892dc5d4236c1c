//! # Price Inversion
//!
//! Recovers a fractional per-unit price from a truncated integer total.
//!
//! When an item is sold by a billable measure (weight, length), the
//! checkout service reports an integer selling total in cents obtained by
//! truncating `real_price * unit_multiplier`. Catalog callers need the real
//! per-unit price back. [`calculate_price`] returns a value `x` satisfying
//! the truncation law `trunc(x * unit_multiplier) == selling_price`,
//! preferring the catalog list price whenever it already satisfies it.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use storefront_assembly::domain::services::calculate_price;
//! use storefront_assembly::domain::value_objects::Cents;
//!
//! // 500 cents/kg at 0.5 kg truncates to 250 cents: list price kept as-is.
//! let half = Decimal::new(5, 1);
//! let price = calculate_price(half, Cents::new(250), Cents::new(500));
//! assert_eq!(price, Ok(Decimal::from(500)));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Cents;
use rust_decimal::{Decimal, RoundingStrategy};

/// Recovers a real per-unit price consistent with a truncated total.
///
/// The admissible half-open interval for the result is
/// `[(selling*10 - 1) / (multiplier*10), (selling*10 + 9) / (multiplier*10))`.
/// The list price is returned unchanged when it already satisfies the
/// truncation law; otherwise the smallest admissible integer price is
/// preferred, falling back to the interval midpoint rounded to one decimal
/// place.
///
/// # Arguments
///
/// * `unit_multiplier` - Conversion factor between one quantity unit and
///   its billable measure. Must be positive.
/// * `selling_price` - Truncated selling total in cents.
/// * `list_price` - Catalog list price in cents, preferred when consistent.
///
/// # Errors
///
/// Returns [`DomainError::ZeroUnitMultiplier`] for a zero multiplier and
/// [`DomainError::NegativeUnitMultiplier`] for a negative one; the
/// admissible interval is undefined in both cases.
pub fn calculate_price(
    unit_multiplier: Decimal,
    selling_price: Cents,
    list_price: Cents,
) -> DomainResult<Decimal> {
    if unit_multiplier == Decimal::ZERO {
        return Err(DomainError::ZeroUnitMultiplier);
    }
    if unit_multiplier.is_sign_negative() {
        return Err(DomainError::NegativeUnitMultiplier);
    }

    let selling = selling_price.to_decimal();
    let list = list_price.to_decimal();

    if (list * unit_multiplier).trunc() == selling {
        return Ok(list);
    }

    let denominator = unit_multiplier * Decimal::TEN;
    let min_range = (selling * Decimal::TEN - Decimal::ONE) / denominator;
    let max_range = (selling * Decimal::TEN + Decimal::from(9)) / denominator;

    let candidate = min_range.ceil();
    if candidate != min_range
        && candidate < max_range
        && candidate * unit_multiplier > selling
    {
        return Ok(candidate);
    }

    Ok(((min_range + max_range) / Decimal::TWO)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn satisfies_truncation_law(result: Decimal, multiplier: Decimal, selling: Cents) -> bool {
        (result * multiplier).trunc() == selling.to_decimal()
    }

    #[test]
    fn consistent_list_price_is_kept() {
        // trunc(500 * 0.5) == 250
        let result = calculate_price(Decimal::new(5, 1), Cents::new(250), Cents::new(500));
        assert_eq!(result, Ok(Decimal::from(500)));
    }

    #[test]
    fn inconsistent_list_price_falls_in_admissible_interval() {
        // selling 133 at multiplier 3: interval [44.3, 44.6333...)
        let multiplier = Decimal::from(3);
        let result = calculate_price(multiplier, Cents::new(133), Cents::new(100)).unwrap();

        let min_range = Decimal::new(1329, 0) / Decimal::from(30);
        let max_range = Decimal::new(1339, 0) / Decimal::from(30);
        assert!(result >= min_range && result < max_range);
        assert!(satisfies_truncation_law(result, multiplier, Cents::new(133)));
        assert_eq!(result, Decimal::new(445, 1));
    }

    #[test]
    fn integer_candidate_preferred_when_admissible() {
        // selling 9 at multiplier 0.2: interval [44.5, 49.5); ceil = 45,
        // and 45 * 0.2 = 9.0 fails the strict check, midpoint fallback.
        let multiplier = Decimal::new(2, 1);
        let result = calculate_price(multiplier, Cents::new(9), Cents::new(1)).unwrap();
        assert!(satisfies_truncation_law(result, multiplier, Cents::new(9)));

        // selling 7 at multiplier 0.4: interval [17.25, 19.75); ceil = 18,
        // 18 * 0.4 = 7.2 > 7 so the integer candidate wins.
        let multiplier = Decimal::new(4, 1);
        let result = calculate_price(multiplier, Cents::new(7), Cents::new(1)).unwrap();
        assert_eq!(result, Decimal::from(18));
        assert!(satisfies_truncation_law(result, multiplier, Cents::new(7)));
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let result = calculate_price(Decimal::ZERO, Cents::new(100), Cents::new(100));
        assert_eq!(result, Err(DomainError::ZeroUnitMultiplier));
    }

    #[test]
    fn negative_multiplier_is_rejected() {
        let result = calculate_price(Decimal::from(-1), Cents::new(100), Cents::new(100));
        assert_eq!(result, Err(DomainError::NegativeUnitMultiplier));
    }

    proptest! {
        // Truncation law over fractional multipliers in (0, 1].
        #[test]
        fn truncation_law_holds(
            thousandths in 1u32..=1000,
            selling in 0u64..=1_000_000,
            list in 0u64..=1_000_000,
        ) {
            let multiplier = Decimal::new(i64::from(thousandths), 3);
            let result =
                calculate_price(multiplier, Cents::new(selling), Cents::new(list)).unwrap();
            prop_assert!(satisfies_truncation_law(result, multiplier, Cents::new(selling)));
        }

        // Whole-unit items: any consistent list price is returned unchanged.
        #[test]
        fn unit_multiplier_one_keeps_consistent_list(price in 0u64..=1_000_000) {
            let result =
                calculate_price(Decimal::ONE, Cents::new(price), Cents::new(price)).unwrap();
            prop_assert_eq!(result, Decimal::from(price));
        }
    }
}
