//! # Sweetshop Storefront Library
//!
//! The session layer between the storefront views and `sweetshop-core`.
//!
//! ## Module Organization
//! ```text
//! sweetshop_storefront/
//! ├── lib.rs          ◄─── You are here (logging setup & listing entry point)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Logged-in shopper: token + cart
//! │   ├── catalog.rs  ◄─── Current snapshot, refresh tickets
//! │   └── config.rs   ◄─── Configuration loading
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Listing and filter commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Order placement
//! ├── submitter.rs    ◄─── OrderSubmitter boundary
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod submitter;

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::catalog::{load_catalog, search_sweets, SearchRequest, SweetView};
use error::{ApiError, ErrorCode};
use state::{CatalogState, StorefrontConfig};

/// Prints the filtered catalog listing.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,sweetshop=debug; override with RUST_LOG             │
/// │                                                                         │
/// │  2. Load Configuration                                                  │
/// │     • defaults → storefront.toml → SWEETSHOP_* variables                │
/// │                                                                         │
/// │  3. Load Catalog Snapshot                                               │
/// │     • sweets JSON from catalog_path                                     │
/// │                                                                         │
/// │  4. Filter & Print                                                      │
/// │     • args: [search] [category]                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run<I>(args: I) -> Result<(), ApiError>
where
    I: IntoIterator<Item = String>,
{
    init_tracing();

    info!("Starting sweetshop storefront");

    let mut args = args.into_iter();
    let request = SearchRequest {
        search: args.next().unwrap_or_default(),
        category: args.next(),
        ..SearchRequest::default()
    };

    let config = StorefrontConfig::load_or_default(None);
    let path = config.catalog_path.clone().ok_or_else(|| {
        ApiError::new(
            ErrorCode::ConfigError,
            "No catalog file configured (set catalog_path or SWEETSHOP_CATALOG_PATH)",
        )
    })?;

    let catalog = CatalogState::with_snapshot(load_catalog(&read_catalog(&path)?, None)?);
    info!(items = catalog.items().len(), ?path, "Catalog snapshot ready");

    let views = search_sweets(&catalog, &config, &request)?;
    print!("{}", render_listing(&views));
    Ok(())
}

/// One line per sweet: name, price, stock status.
pub fn render_listing(views: &[SweetView]) -> String {
    let mut out = String::new();
    for view in views {
        let status = if !view.in_stock {
            "out of stock".to_string()
        } else if view.low_stock {
            format!("only {} {} left", view.stock, view.unit)
        } else {
            format!("{} {} in stock", view.stock, view.unit)
        };
        let _ = writeln!(out, "{:<24} {:>16}  {}", view.name, view.display_price, status);
    }
    if views.is_empty() {
        out.push_str("No sweets match your filters\n");
    }
    out
}

fn read_catalog(path: &Path) -> Result<String, ApiError> {
    std::fs::read_to_string(path).map_err(|e| {
        ApiError::new(
            ErrorCode::ConfigError,
            format!("Failed to read catalog {}: {}", path.display(), e),
        )
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sweetshop=trace` - Show trace for sweetshop crates only
/// - Default: INFO, DEBUG for sweetshop crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sweetshop=debug"));

    // A subscriber may already be installed (tests, embedding apps).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
