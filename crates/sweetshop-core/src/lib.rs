//! # sweetshop-core: Pure Storefront Logic
//!
//! The cart engine behind the sweets storefront. Everything here is pure:
//! quantities, totals, stock clamping, order payloads and catalog filtering.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sweetshop Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Views (catalog grid, cart panel)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront (session, commands)               │   │
//! │  │    add_to_cart, search_sweets, checkout, config, tracing        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ sweetshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ quantity  │  │   money   │  │   cart    │  │  filter   │  │   │
//! │  │   │   Unit    │  │   Money   │  │CartEngine │  │CatalogQuery│ │   │
//! │  │   │ Quantity  │  │ half-even │  │ CartLine  │  │  search   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TOKEN STORAGE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`quantity`] - Units and fixed-point quantities
//! - [`money`] - Integer money in paise
//! - [`types`] - Catalog item, category and image types
//! - [`catalog`] - Wire records and the catalog snapshot
//! - [`cart`] - The cart engine and order payload
//! - [`filter`] - Search, category and stock filtering
//! - [`validation`] - Input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sweetshop_core::{CartEngine, CatalogSnapshot, Money, Quantity};
//!
//! let catalog = CatalogSnapshot::from_json(
//!     r#"[{"id": 1, "name": "Rasgulla", "price": "280.00", "unit": "kg", "quantity": 15},
//!         {"id": 2, "name": "Gulab Jamun", "price": 320, "unit": "kg", "quantity": 12}]"#,
//!     None,
//! ).unwrap();
//!
//! let mut cart = CartEngine::new();
//! let items = catalog.items();
//! cart.add_item(&items[0], Quantity::whole(2));
//! cart.add_one(&items[1]);
//!
//! assert_eq!(cart.total(), Money::from_major(880));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod quantity;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartEngine, CartLine, LineAdjustment, OrderLine, OrderRequest, RemovalReason};
pub use catalog::{Catalog, CatalogSnapshot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::{filter_sweets, CatalogQuery, CategoryFilter, SortOrder, StockFilter};
pub use money::Money;
pub use quantity::{normalize_quantity, Quantity, Unit};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sweets with fewer whole units than this in stock are shown as running low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Largest catalog price in paise (backend `DecimalField(max_digits=8, decimal_places=2)`)
pub const MAX_PRICE_MINOR: i64 = 99_999_999;

/// Maximum length of a sweet's name (backend column width)
pub const MAX_NAME_LEN: usize = 100;
