//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View                        Rust                                       │
//! │  ────                        ────                                       │
//! │                                                                         │
//! │  update_cart_item(...)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart Error? ───── CoreError::ItemNotFound(7) ─────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Submit Error? ─── SubmitError::Rejected ──────── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "NOT_FOUND", "message": "Sweet not found: 7" }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sweetshop_core::CoreError;

use crate::state::ConfigError;
use crate::submitter::SubmitError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the view receives when a command fails:
/// ```json
/// {
///   "code": "EMPTY_CART",
///   "message": "Your cart is empty"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Sweet missing from the catalog or the cart
    NotFound,

    /// Quantity input could not be normalized
    InvalidQuantity,

    /// Checkout attempted with nothing in the cart
    EmptyCart,

    /// Input validation failed
    ValidationError,

    /// The order service refused or never answered
    SubmitFailed,

    /// No session, or the backend rejected its token
    NotAuthenticated,

    /// Configuration could not be loaded
    ConfigError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn not_authenticated() -> Self {
        ApiError::new(ErrorCode::NotAuthenticated, "Please log in to continue")
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Sweet", &id.to_string()),
            CoreError::InvalidQuantity { unit, value } => ApiError::new(
                ErrorCode::InvalidQuantity,
                format!("Invalid quantity {} {}", value, unit),
            ),
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, "Your cart is empty"),
            CoreError::InvalidCatalogRecord { id, reason } => {
                tracing::error!(id = %id, reason = %reason, "Rejected catalog record");
                ApiError::validation(format!("Sweet {} could not be loaded: {}", id, reason))
            }
            CoreError::MalformedCatalog(e) => {
                tracing::error!("Malformed catalog payload: {}", e);
                ApiError::validation("The catalog could not be read")
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts order submission errors to API errors.
impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Unauthorized => ApiError::not_authenticated(),
            SubmitError::Rejected(reason) => ApiError::new(
                ErrorCode::SubmitFailed,
                format!("Order was not placed: {}", reason),
            ),
            SubmitError::Unavailable(reason) => {
                tracing::error!("Order service unavailable: {}", reason);
                ApiError::new(
                    ErrorCode::SubmitFailed,
                    "Order service is unavailable, please try again",
                )
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
