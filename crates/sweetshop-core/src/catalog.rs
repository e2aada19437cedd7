//! # Catalog Snapshot
//!
//! The read-only list of sweets the cart and the filters work against.
//!
//! ## Loading
//! ```text
//! GET /sweets/      ──► Vec<SweetRecord>     ─┐
//!                                             ├─► CatalogSnapshot::from_records
//! GET /categories/  ──► Vec<CategoryRecord>  ─┘         │
//!                                                       ├── prices parsed exactly
//!                                                       ├── categories resolved to CategoryId
//!                                                       └── ids checked for uniqueness
//! ```
//!
//! A snapshot is immutable. A refresh replaces it wholesale; the cart
//! re-reads stock and price from whichever snapshot is current.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::filter::CategoryFilter;
use crate::money::Money;
use crate::quantity::Unit;
use crate::types::{CatalogItem, Category, CategoryId, ItemId};
use crate::validation::{validate_item_name, validate_price, validate_stock};

// =============================================================================
// Catalog Boundary
// =============================================================================

/// Synchronous item lookup against the most recently loaded catalog.
pub trait Catalog {
    fn get_item(&self, id: &ItemId) -> Option<&CatalogItem>;
}

// =============================================================================
// Wire Records
// =============================================================================

/// A sweet as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct SweetRecord {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: WirePrice,
    #[serde(default = "default_unit")]
    pub unit: Unit,
    /// Older backend revisions call the stock column `quantity`.
    #[serde(alias = "quantity")]
    pub stock: f64,
    #[serde(default)]
    pub category: Option<WireCategory>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_unit() -> Unit {
    Unit::Kilogram
}

/// Prices arrive as JSON numbers or as decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    Number(serde_json::Number),
    Text(String),
}

impl WirePrice {
    fn to_money(&self) -> Result<Money, ValidationError> {
        match self {
            WirePrice::Number(n) => Money::parse_decimal(&n.to_string()),
            WirePrice::Text(s) => Money::parse_decimal(s),
        }
    }
}

/// The shapes a sweet's category reference takes on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireCategory {
    Object { id: i64, name: String },
    Id(i64),
    Name(String),
}

/// An entry of the category list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// Snapshot
// =============================================================================

/// An immutable, indexed catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
    categories: Vec<Category>,
}

impl CatalogSnapshot {
    /// Builds a snapshot from already-typed items.
    ///
    /// Fails if two items share an id.
    pub fn new(items: Vec<CatalogItem>, categories: Vec<Category>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CoreError::InvalidCatalogRecord {
                    id: item.id.to_string(),
                    reason: "duplicate id".to_string(),
                });
            }
        }

        let mut snapshot = CatalogSnapshot {
            items,
            index,
            categories,
        };
        snapshot.collect_item_categories();
        Ok(snapshot)
    }

    /// Builds a snapshot from backend records, resolving every category
    /// reference to a single [`CategoryId`].
    pub fn from_records(
        sweets: Vec<SweetRecord>,
        categories: Vec<CategoryRecord>,
    ) -> CoreResult<Self> {
        let known: Vec<Category> = categories
            .into_iter()
            .map(|c| Category {
                id: CategoryId::Numeric(c.id),
                name: c.name,
            })
            .collect();

        let items = sweets
            .into_iter()
            .map(|record| item_from_record(record, &known))
            .collect::<CoreResult<Vec<_>>>()?;

        CatalogSnapshot::new(items, known)
    }

    /// Parses the sweets (and optionally categories) JSON bodies.
    pub fn from_json(sweets_json: &str, categories_json: Option<&str>) -> CoreResult<Self> {
        let sweets: Vec<SweetRecord> = serde_json::from_str(sweets_json)?;
        let categories: Vec<CategoryRecord> = match categories_json {
            Some(body) => serde_json::from_str(body)?,
            None => Vec::new(),
        };
        CatalogSnapshot::from_records(sweets, categories)
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Known categories: the category list first, then any only seen on items.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolves the shopper's category selection against this snapshot.
    ///
    /// `"all"` (any case) or a blank selection means no category filter.
    /// Otherwise the selection matches a category's id text or, ignoring
    /// case, its name. An unknown selection resolves to a filter that
    /// matches nothing.
    pub fn resolve_category_filter(&self, selection: &str) -> CategoryFilter {
        let selection = selection.trim();
        if selection.is_empty() || selection.eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }

        self.categories
            .iter()
            .find(|c| c.id.to_string() == selection || c.name.eq_ignore_ascii_case(selection))
            .map(|c| CategoryFilter::Only(c.id.clone()))
            .unwrap_or_else(|| CategoryFilter::Only(CategoryId::named(selection)))
    }

    fn collect_item_categories(&mut self) {
        for item in &self.items {
            if let Some(category) = &item.category {
                if !self.categories.iter().any(|c| c.id == category.id) {
                    self.categories.push(category.clone());
                }
            }
        }
    }
}

impl Catalog for CatalogSnapshot {
    fn get_item(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.index.get(id).map(|&position| &self.items[position])
    }
}

fn item_from_record(record: SweetRecord, known: &[Category]) -> CoreResult<CatalogItem> {
    let id = record.id.to_string();
    let invalid = |err: ValidationError| CoreError::InvalidCatalogRecord {
        id: id.clone(),
        reason: err.to_string(),
    };

    validate_item_name(&record.name).map_err(invalid)?;
    let price = record.price.to_money().map_err(invalid)?;
    validate_price(price).map_err(invalid)?;
    let stock = validate_stock(record.stock).map_err(invalid)?;

    Ok(CatalogItem {
        id: record.id,
        name: record.name.trim().to_string(),
        description: record.description.unwrap_or_default(),
        price,
        unit: record.unit,
        stock,
        category: record.category.map(|c| resolve_category(c, known)),
        image_url: record.image_url,
    })
}

fn resolve_category(wire: WireCategory, known: &[Category]) -> Category {
    match wire {
        WireCategory::Object { id, name } => Category {
            id: CategoryId::Numeric(id),
            name,
        },
        WireCategory::Id(id) => known
            .iter()
            .find(|c| c.id == CategoryId::Numeric(id))
            .cloned()
            .unwrap_or_else(|| Category {
                id: CategoryId::Numeric(id),
                name: id.to_string(),
            }),
        WireCategory::Name(name) => known
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .unwrap_or_else(|| Category {
                id: CategoryId::named(&name),
                name: name.trim().to_string(),
            }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
