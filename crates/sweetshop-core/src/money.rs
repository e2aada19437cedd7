//! # Money Module
//!
//! Provides the `Money` type for handling prices and cart totals exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In the browser prototype:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    ₹280 × 0.3 kg = 84.00000000000001                                    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    28000 paise × 300 g / 1000 = 8400 paise                              │
//! │    Division happens once per line, with explicit rounding               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sweetshop_core::money::Money;
//! use sweetshop_core::quantity::Quantity;
//!
//! let per_kg = Money::from_major(280);
//! let line = per_kg.times_quantity(Quantity::from_millis(250)); // 0.25 kg
//! assert_eq!(line, Money::from_major(70));
//!
//! let parsed = Money::parse_decimal("320.50").unwrap();
//! assert_eq!(parsed.minor(), 32050);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::quantity::Quantity;

/// Minor units per major unit (paise per rupee).
pub const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                     │
///                                                     ▼
///                                           CartEngine::total()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paise).
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole major units (rupees).
    ///
    /// ```rust
    /// use sweetshop_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(280).minor(), 28000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * MINOR_PER_MAJOR)
    }

    /// Parses a decimal amount such as `"280"`, `"280.5"` or `"-3.25"`.
    ///
    /// The backend sends prices as fixed-point decimals with two places.
    /// Anything finer than one paisa is rejected instead of rounded, so a
    /// parsed price is always exact.
    pub fn parse_decimal(input: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let text = input.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("empty amount"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must be a decimal number"));
        }
        if frac.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount too large"))?
        };
        let frac_value: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let minor = whole_value
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(frac_value))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -minor } else { minor }))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the whole major-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor-unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-unit price by a quantity.
    ///
    /// Quantities carry three decimal places, so the product is divided by
    /// 1000 once. A fractional paisa (only possible for gram-resolution
    /// weights) is settled with round-half-to-even.
    ///
    /// ```rust
    /// use sweetshop_core::money::Money;
    /// use sweetshop_core::quantity::Quantity;
    ///
    /// let price = Money::from_major(320);
    /// assert_eq!(price.times_quantity(Quantity::whole(1)).minor(), 32000);
    ///
    /// // ₹2.99 per kg × 1 g = 0.299 paise → 0
    /// assert_eq!(Money::from_minor(299).times_quantity(Quantity::from_millis(1)).minor(), 0);
    /// ```
    ///
    /// A product outside the `i64` range saturates at the nearest bound.
    pub fn times_quantity(&self, quantity: Quantity) -> Money {
        let raw = (self.0 as i128).saturating_mul(quantity.millis() as i128);
        let settled = div_round_half_even(raw, Quantity::SCALE as i128);
        Money(i64::try_from(settled).unwrap_or(if settled < 0 { i64::MIN } else { i64::MAX }))
    }

    /// Multiplies by a whole factor (e.g. price per gram → price per kg),
    /// saturating at the `i64` bounds.
    #[inline]
    pub const fn scaled(&self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }
}

/// Integer division rounding exact halves to the even neighbour.
fn div_round_half_even(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    let twice = remainder * 2;

    if twice > denominator || (twice == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. The storefront formats with its configured
/// currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_parts() {
        let money = Money::from_minor(32050);
        assert_eq!(money.major(), 320);
        assert_eq!(money.minor_part(), 50);
        assert_eq!(Money::from_major(280).minor(), 28000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(880).to_string(), "₹880.00");
        assert_eq!(Money::from_minor(5).to_string(), "₹0.05");
        assert_eq!(Money::from_minor(-550).to_string(), "-₹5.50");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("280").unwrap().minor(), 28000);
        assert_eq!(Money::parse_decimal("280.5").unwrap().minor(), 28050);
        assert_eq!(Money::parse_decimal(" 280.05 ").unwrap().minor(), 28005);
        assert_eq!(Money::parse_decimal(".75").unwrap().minor(), 75);
        assert_eq!(Money::parse_decimal("-3.25").unwrap().minor(), -325);

        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal("12.345").is_err());
        assert!(Money::parse_decimal("1e3").is_err());
        assert!(Money::parse_decimal("abc").is_err());
    }

    #[test]
    fn test_times_quantity_is_exact() {
        let per_kg = Money::from_major(280);
        assert_eq!(per_kg.times_quantity(Quantity::whole(2)), Money::from_major(560));
        assert_eq!(
            per_kg.times_quantity(Quantity::from_millis(300)),
            Money::from_major(84)
        );
    }

    #[test]
    fn test_times_quantity_rounds_half_even() {
        // 5 paise × 0.1 = 0.5 paise → 0 (even)
        assert_eq!(Money::from_minor(5).times_quantity(Quantity::from_millis(100)).minor(), 0);
        // 15 paise × 0.1 = 1.5 paise → 2 (even)
        assert_eq!(Money::from_minor(15).times_quantity(Quantity::from_millis(100)).minor(), 2);
        // 25 paise × 0.1 = 2.5 paise → 2 (even)
        assert_eq!(Money::from_minor(25).times_quantity(Quantity::from_millis(100)).minor(), 2);
        // 17 paise × 0.1 = 1.7 paise → 2
        assert_eq!(Money::from_minor(17).times_quantity(Quantity::from_millis(100)).minor(), 2);
    }

    #[test]
    fn test_negative_half_even() {
        assert_eq!(div_round_half_even(-5, 10), 0);
        assert_eq!(div_round_half_even(-15, 10), -2);
        assert_eq!(div_round_half_even(-16, 10), -2);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_major(560), Money::from_major(320)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_major(880));
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let huge = Money::parse_decimal("10000000000000000").unwrap();
        assert_eq!(huge.scaled(Quantity::SCALE).minor(), i64::MAX);
        assert_eq!(Money::from_minor(i64::MAX).times_quantity(Quantity::whole(5)).minor(), i64::MAX);
        assert_eq!(Money::from_minor(i64::MIN).scaled(2).minor(), i64::MIN);

        let total: Money = [Money::from_minor(i64::MAX), Money::from_major(1)]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), i64::MAX);
    }

    /// 0.1 + 0.2 style drift cannot happen with integer paise.
    #[test]
    fn test_no_float_drift() {
        let a = Money::parse_decimal("0.10").unwrap();
        let b = Money::parse_decimal("0.20").unwrap();
        assert_eq!(a + b, Money::parse_decimal("0.30").unwrap());
    }
}
