//! # Catalog Commands
//!
//! Listing, filtering and refreshing the sweets catalog.
//!
//! ```text
//! filter panel ──► SearchRequest ──► search_sweets() ──► Vec<SweetView>
//!                                        │
//!                                        ├── category text resolved against the snapshot
//!                                        ├── price bounds parsed exactly
//!                                        └── CatalogQuery::apply (order preserving)
//! ```

use serde::{Deserialize, Serialize};
use sweetshop_core::{
    CatalogItem, CatalogQuery, CatalogSnapshot, ImageSource, ItemId, LineAdjustment, Money,
    SortOrder, StockFilter, Unit,
};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{CatalogState, RefreshTicket, SessionContext, StorefrontConfig};

// =============================================================================
// Request / Response
// =============================================================================

/// Filter panel contents as the view sends them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    pub search: String,
    /// `"all"`, a category id or a category name
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub stock: StockFilter,
    pub sort: SortOrder,
}

/// A sweet as the catalog grid renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweetView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Money,
    /// "₹280.00/kg"
    pub display_price: String,
    pub unit: Unit,
    pub stock: f64,
    pub in_stock: bool,
    pub low_stock: bool,
    pub image: ImageSource,
}

impl SweetView {
    fn build(item: &CatalogItem, config: &StorefrontConfig) -> Self {
        SweetView {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.as_ref().map(|c| c.name.clone()),
            price: item.price,
            display_price: format!("{}/{}", config.format_money(item.price), item.unit),
            unit: item.unit,
            stock: item.stock.as_f64(),
            in_stock: item.is_in_stock(),
            low_stock: item.is_low_stock(config.low_stock_threshold),
            image: item.image_source(config.media_base_url()),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Parses the sweets and categories response bodies into a snapshot.
pub fn load_catalog(
    sweets_json: &str,
    categories_json: Option<&str>,
) -> Result<CatalogSnapshot, ApiError> {
    let snapshot = CatalogSnapshot::from_json(sweets_json, categories_json)?;
    debug!(
        items = snapshot.len(),
        categories = snapshot.categories().len(),
        "Catalog loaded"
    );
    Ok(snapshot)
}

/// Filters the current catalog.
///
/// ## Errors
/// `VALIDATION_ERROR` for a malformed price bound or an inverted price
/// range. The search term is matched as typed and never fails.
pub fn search_sweets(
    catalog: &CatalogState,
    config: &StorefrontConfig,
    request: &SearchRequest,
) -> Result<Vec<SweetView>, ApiError> {
    debug!(
        search = %request.search,
        category = ?request.category,
        stock = ?request.stock,
        sort = ?request.sort,
        "search_sweets command"
    );

    let snapshot = catalog.snapshot();
    let category = snapshot.resolve_category_filter(request.category.as_deref().unwrap_or(""));

    let query = CatalogQuery::new()
        .search(request.search.as_str())
        .category(category)
        .price_between(
            parse_price_bound(request.min_price.as_deref())?,
            parse_price_bound(request.max_price.as_deref())?,
        )
        .stock(request.stock)
        .sort(request.sort)
        .low_stock_threshold(config.low_stock_threshold);

    let matched = query.apply(snapshot.items())?;
    Ok(matched
        .into_iter()
        .map(|item| SweetView::build(item, config))
        .collect())
}

/// Finishes a catalog refresh and re-checks the session's cart against it.
///
/// Superseded refreshes are dropped and change nothing.
pub fn apply_catalog_refresh(
    catalog: &mut CatalogState,
    session: Option<&mut SessionContext>,
    ticket: RefreshTicket,
    snapshot: CatalogSnapshot,
) -> Vec<LineAdjustment> {
    if !catalog.complete_refresh(ticket, snapshot) {
        return Vec::new();
    }

    let Some(session) = session else {
        return Vec::new();
    };

    let adjustments = session.cart.reconcile(&*catalog);
    for adjustment in &adjustments {
        warn!(?adjustment, "Cart line adjusted after catalog refresh");
    }
    adjustments
}

fn parse_price_bound(input: Option<&str>) -> Result<Option<Money>, ApiError> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => Ok(Some(Money::parse_decimal(text).map_err(|e| ApiError::validation(e.to_string()))?)),
    }
}
