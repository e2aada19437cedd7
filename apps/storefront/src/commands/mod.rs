//! # Commands Module
//!
//! Everything the storefront views call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Listing, filtering, refresh
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Order placement
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_sweets(catalog: &CatalogState, config: &StorefrontConfig, ...)
//!
//! // Cart plus live stock
//! fn add_to_cart(session: &mut SessionContext, catalog: &CatalogState, ...)
//!
//! // Session plus the order service
//! async fn checkout(session: &mut SessionContext, submitter: &S, ...)
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
