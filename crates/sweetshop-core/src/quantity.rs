//! # Quantities and Units
//!
//! Sweets are sold by weight (grams, kilograms) or by count (pieces,
//! packets, boxes). The cart stores every quantity in the item's **base
//! unit**: kilograms for weight items, a whole count for discrete items.
//!
//! ## Base Unit Mapping
//! ```text
//! ┌───────────┬────────────┬─────────┬───────────────┬──────────────────┐
//! │ Unit      │ Base unit  │ Step    │ Minimum       │ Raw input        │
//! ├───────────┼────────────┼─────────┼───────────────┼──────────────────┤
//! │ gram      │ kilogram   │ 0.001   │ 0.001 (1 g)   │ 250 → 0.25 kg    │
//! │ kilogram  │ kilogram   │ 0.1     │ 0.1           │ 0.25 → 0.25 kg   │
//! │ piece     │ count      │ 1       │ 1             │ 2.6 → 3          │
//! │ packet    │ count      │ 1       │ 1             │                  │
//! │ box       │ count      │ 1       │ 1             │                  │
//! └───────────┴────────────┴─────────┴───────────────┴──────────────────┘
//! ```
//!
//! ## Fixed-Point Representation
//! A [`Quantity`] is an integer number of thousandths of its unit. One gram
//! is therefore the finest weight the cart can hold. Nothing in the type
//! stops a discrete count from carrying a fraction (a catalog may report
//! 2.5 boxes), so the cart passes every discrete quantity through
//! [`Unit::conform`] or [`Quantity::floor_whole`] before storing it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Unit
// =============================================================================

/// The unit a sweet is priced and stocked in.
///
/// Wire names follow the backend (`g`, `kg`, `pieces`, `packets`, `boxes`);
/// long singular names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    #[serde(rename = "g", alias = "gram", alias = "grams")]
    Gram,
    #[serde(rename = "kg", alias = "kilogram", alias = "kilograms")]
    Kilogram,
    #[serde(rename = "pieces", alias = "piece")]
    Piece,
    #[serde(rename = "packets", alias = "packet")]
    Packet,
    #[serde(rename = "boxes", alias = "box")]
    Box,
}

impl Unit {
    /// Counted units hold whole quantities only.
    #[inline]
    pub const fn is_discrete(&self) -> bool {
        matches!(self, Unit::Piece | Unit::Packet | Unit::Box)
    }

    /// Stepper granularity in the base unit.
    pub const fn step(&self) -> Quantity {
        match self {
            Unit::Gram => Quantity::from_millis(1),
            Unit::Kilogram => Quantity::from_millis(100),
            Unit::Piece | Unit::Packet | Unit::Box => Quantity::whole(1),
        }
    }

    /// Smallest quantity a line may hold, in the base unit.
    #[inline]
    pub const fn min_quantity(&self) -> Quantity {
        self.step()
    }

    /// One of this unit, expressed in the base unit.
    pub const fn one(&self) -> Quantity {
        match self {
            Unit::Gram => Quantity::from_millis(1),
            _ => Quantity::whole(1),
        }
    }

    /// Converts a quantity counted in this unit into the base unit.
    ///
    /// Only grams change scale (grams → kilograms); sub-gram remainders
    /// are truncated.
    pub const fn to_base(&self, quantity: Quantity) -> Quantity {
        match self {
            Unit::Gram => Quantity::from_millis(quantity.millis() / Quantity::SCALE),
            _ => quantity,
        }
    }

    /// Snaps a base-unit quantity to what a cart line of this unit can hold.
    ///
    /// Discrete units round to the nearest whole count (halves round up,
    /// like [`normalize_quantity`]); weights pass through unchanged.
    ///
    /// ```rust
    /// use sweetshop_core::quantity::{Quantity, Unit};
    ///
    /// assert_eq!(Unit::Piece.conform(Quantity::from_millis(2600)), Quantity::whole(3));
    /// assert_eq!(Unit::Kilogram.conform(Quantity::from_millis(2600)), Quantity::from_millis(2600));
    /// ```
    pub const fn conform(&self, quantity: Quantity) -> Quantity {
        if self.is_discrete() {
            quantity.round_whole()
        } else {
            quantity
        }
    }

    /// Short label used next to prices and stock ("₹280/kg").
    pub const fn label(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Piece => "pieces",
            Unit::Packet => "packets",
            Unit::Box => "boxes",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A non-negative amount in thousandths of a unit.
///
/// Serializes as a plain JSON number: whole values as integers (`3`),
/// fractional ones as decimals (`0.25`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(i64);

impl Quantity {
    /// Thousandths per whole unit.
    pub const SCALE: i64 = 1000;

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Quantity(millis)
    }

    #[inline]
    pub const fn whole(units: i64) -> Self {
        Quantity(units * Self::SCALE)
    }

    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the whole count when the quantity has no fractional part.
    pub const fn as_whole(&self) -> Option<i64> {
        if self.0 % Self::SCALE == 0 {
            Some(self.0 / Self::SCALE)
        } else {
            None
        }
    }

    /// Drops any fractional part (2.5 → 2).
    #[inline]
    pub const fn floor_whole(&self) -> Quantity {
        Quantity(self.0.div_euclid(Self::SCALE) * Self::SCALE)
    }

    /// Rounds to the nearest whole unit, halves away from zero (2.5 → 3).
    pub const fn round_whole(&self) -> Quantity {
        let magnitude = self.0.saturating_abs().saturating_add(Self::SCALE / 2) / Self::SCALE * Self::SCALE;
        Quantity(if self.0 < 0 { -magnitude } else { magnitude })
    }

    /// Lossy conversion for display and JSON output.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Converts a finite, non-negative decimal to the nearest thousandth.
    pub(crate) fn from_f64(value: f64) -> Option<Self> {
        let millis = (value * Self::SCALE as f64).round();
        if !millis.is_finite() || millis < 0.0 || millis > i64::MAX as f64 {
            return None;
        }
        Some(Quantity(millis as i64))
    }

    #[inline]
    pub fn saturating_add(self, other: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(other.0))
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Quantity(self.0 + other.0)
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Quantity(self.0 - other.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_whole() {
            Some(units) => write!(f, "{}", units),
            None => {
                let frac = format!("{:03}", (self.0 % Self::SCALE).abs());
                let sign = if self.0 < 0 { "-" } else { "" };
                write!(
                    f,
                    "{}{}.{}",
                    sign,
                    (self.0 / Self::SCALE).abs(),
                    frac.trim_end_matches('0')
                )
            }
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_whole() {
            Some(units) => serializer.serialize_i64(units),
            None => serializer.serialize_f64(self.as_f64()),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Quantity::from_f64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("quantity must be finite and non-negative, got {}", value))
        })
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Converts a raw quantity typed by the shopper into the item's base unit.
///
/// ## Rules
/// - **gram**: values `>= 1` are whole grams and are divided by 1000.
///   Values below 1 are taken as kilograms already. This boundary is
///   inherited from the storefront's quantity picker and is kept as-is:
///   `0.5` with unit gram means half a kilogram, not half a gram.
/// - **kilogram**: used directly.
/// - **piece / packet / box**: rounded to the nearest integer.
///
/// Fails with [`CoreError::InvalidQuantity`] when the input is not finite
/// or the normalized value is negative.
///
/// ```rust
/// use sweetshop_core::quantity::{normalize_quantity, Quantity, Unit};
///
/// assert_eq!(normalize_quantity(Unit::Gram, 250.0).unwrap(), Quantity::from_millis(250));
/// assert_eq!(normalize_quantity(Unit::Kilogram, 0.25).unwrap(), Quantity::from_millis(250));
/// assert_eq!(normalize_quantity(Unit::Piece, 3.0).unwrap(), Quantity::whole(3));
/// ```
pub fn normalize_quantity(unit: Unit, raw: f64) -> CoreResult<Quantity> {
    let invalid = || CoreError::InvalidQuantity { unit, value: raw };

    if !raw.is_finite() {
        return Err(invalid());
    }

    let base = match unit {
        Unit::Gram if raw >= 1.0 => raw / 1000.0,
        Unit::Gram | Unit::Kilogram => raw,
        Unit::Piece | Unit::Packet | Unit::Box => raw.round(),
    };

    if base < 0.0 {
        return Err(invalid());
    }

    Quantity::from_f64(base).ok_or_else(invalid)
}

// =============================================================================
// Unit Tests
// =============================================================================
