//! # Error Types
//!
//! Domain-specific error types for sweetshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sweetshop-core errors (this file)                                      │
//! │  ├── CoreError        - Cart / catalog failures                         │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  storefront errors (app crate)                                          │
//! │  ├── SubmitError      - Order submission collaborator failures          │
//! │  └── ApiError         - What the view layer sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is local and recoverable. A failed cart operation leaves
//! the cart exactly as it was.

use thiserror::Error;

use crate::quantity::Unit;
use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The referenced item is not in the catalog snapshot (or not in the
    /// cart, for edits of an existing line).
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// A raw quantity normalized to a negative or non-finite value.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity picker: "-2" (unit: kg)
    ///      │
    ///      ▼
    /// normalize_quantity(Kilogram, -2.0)
    ///      │
    ///      ▼
    /// InvalidQuantity { unit: kg, value: -2 }
    ///      │
    ///      ▼
    /// UI shows: "Invalid quantity -2 kg"
    /// ```
    #[error("Invalid quantity {value} {unit}")]
    InvalidQuantity { unit: Unit, value: f64 },

    /// An order payload was requested for a cart with no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A catalog record violates a catalog invariant.
    #[error("Invalid catalog record {id}: {reason}")]
    InvalidCatalogRecord { id: String, reason: String },

    /// The catalog payload is not valid JSON for the expected shape.
    #[error("Malformed catalog payload: {0}")]
    MalformedCatalog(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value exceeds the largest amount the backend can store.
    #[error("{field} must be at most {max}")]
    TooLarge { field: String, max: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// A range has its bounds the wrong way round.
    #[error("{field}: minimum {min} exceeds maximum {max}")]
    InvertedRange { field: String, min: String, max: String },

    /// Invalid format (e.g. a price with three decimals).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound(ItemId::Numeric(7));
        assert_eq!(err.to_string(), "Item not found: 7");

        let err = CoreError::InvalidQuantity {
            unit: Unit::Kilogram,
            value: -2.0,
        };
        assert_eq!(err.to_string(), "Invalid quantity -2 kg");

        assert_eq!(CoreError::EmptyCart.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "query must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
