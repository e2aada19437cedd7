//! # State Module
//!
//! Storefront state, split by concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  SessionContext  │  │   CatalogState   │  │  StorefrontConfig    │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  user, token     │  │  Arc<Snapshot>   │  │  api_base_url        │  │
//! │  │  CartEngine      │  │  refresh tickets │  │  currency_symbol     │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • SessionContext: one per shopper, mutated through &mut               │
//! │  • CatalogState: replaced wholesale on refresh                         │
//! │  • StorefrontConfig: read-only after load                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::{CatalogState, RefreshTicket};
pub use config::{ConfigError, ConfigResult, StorefrontConfig};
pub use session::{AuthToken, LoginResponse, SessionContext, SessionUser};
