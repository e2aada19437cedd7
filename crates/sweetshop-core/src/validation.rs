//! # Validation Module
//!
//! Input validation for catalog records and shopper-entered filters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (browser form)                                           │
//! │  └── Immediate feedback (empty fields, number inputs)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Catalog records checked once, when a snapshot loads                │
//! │  └── Price ranges checked before filtering                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend                                                       │
//! │  └── Authoritative stock and price checks at order creation             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::quantity::Quantity;
use crate::{MAX_NAME_LEN, MAX_PRICE_MINOR};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a sweet's display name.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters (backend column width)
///
/// ```rust
/// use sweetshop_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Gulab Jamun").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price. Zero is allowed (free samples).
///
/// The ceiling is ₹999999.99, the widest value the backend column holds.
///
/// ```rust
/// use sweetshop_core::money::Money;
/// use sweetshop_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_minor(99_999_999)).is_ok());
/// assert!(validate_price(Money::from_minor(100_000_000)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    let max = Money::from_minor(MAX_PRICE_MINOR);
    if price > max {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: max.to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level read from the catalog.
pub fn validate_stock(stock: f64) -> ValidationResult<Quantity> {
    if !stock.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "stock".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if stock < 0.0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Quantity::from_f64(stock).ok_or_else(|| ValidationError::TooLarge {
        field: "stock".to_string(),
        max: format!("{}", i64::MAX / Quantity::SCALE),
    })
}

/// Validates an optional price range from the filter panel.
///
/// ```rust
/// use sweetshop_core::money::Money;
/// use sweetshop_core::validation::validate_price_range;
///
/// assert!(validate_price_range(Some(Money::from_major(100)), None).is_ok());
/// assert!(validate_price_range(Some(Money::from_major(500)), Some(Money::from_major(100))).is_err());
/// ```
pub fn validate_price_range(min: Option<Money>, max: Option<Money>) -> ValidationResult<()> {
    if [min, max].into_iter().flatten().any(|bound| bound.is_negative()) {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ValidationError::InvertedRange {
                field: "price".to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
