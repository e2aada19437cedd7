//! # Domain Types
//!
//! Catalog-side types shared by the cart, the filters and the view layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    Category     │   │  ImageSource    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │──►│  id (tagged)    │   │  Remote(url)    │       │
//! │  │  price (Money)  │   │  name           │   │  Placeholder    │       │
//! │  │  unit, stock    │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog items are borrowed read-only from a [`crate::catalog::CatalogSnapshot`];
//! the cart never mutates them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::quantity::{Quantity, Unit};

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a sweet. The backend uses UUID strings; older endpoints
/// and fixtures use integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Numeric(i64),
    Text(String),
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Numeric(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Text(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Text(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Numeric(id) => write!(f, "{}", id),
            ItemId::Text(id) => f.write_str(id),
        }
    }
}

/// Identifier of a category, resolved once when a catalog snapshot loads.
///
/// Categories arrive either as `{id, name}` objects (numeric id) or as a
/// bare name string. Bare names become `Named` with a lowercase key so that
/// "Milk Based" and "milk based" are the same category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CategoryId {
    Numeric(i64),
    Named(String),
}

impl CategoryId {
    /// Builds a named id from display text.
    pub fn named(name: &str) -> Self {
        CategoryId::Named(name.trim().to_lowercase())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryId::Numeric(id) => write!(f, "{}", id),
            CategoryId::Named(key) => f.write_str(key),
        }
    }
}

/// A resolved category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A sweet offered by the shop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    /// Empty when the backend has none.
    pub description: String,
    /// Price per `unit`.
    pub price: Money,
    pub unit: Unit,
    /// Maximum purchasable amount, counted in `unit`.
    pub stock: Quantity,
    pub category: Option<Category>,
    pub image_url: Option<String>,
}

impl CatalogItem {
    /// Stock ceiling in the base unit the cart stores quantities in.
    ///
    /// Discrete stock is floored to a whole count: 2.5 boxes on the shelf
    /// means two can be sold.
    pub fn stock_ceiling(&self) -> Quantity {
        let base = self.unit.to_base(self.stock);
        if self.unit.is_discrete() {
            base.floor_whole()
        } else {
            base
        }
    }

    /// Price of one base unit (per kilogram for gram-priced sweets).
    pub fn unit_price(&self) -> Money {
        match self.unit {
            Unit::Gram => self.price.scaled(Quantity::SCALE),
            _ => self.price,
        }
    }

    /// Smallest quantity a cart line for this item may hold.
    #[inline]
    pub fn min_quantity(&self) -> Quantity {
        self.unit.min_quantity()
    }

    /// At least one sellable step is on the shelf.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock_ceiling().is_positive()
    }

    /// In stock but below `threshold` whole units.
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.is_in_stock() && self.stock < Quantity::whole(threshold)
    }

    /// Where the rendering layer should load this item's picture from.
    ///
    /// Absolute URLs are used as-is; relative media paths are joined to
    /// `media_base_url`. Items without a picture get the placeholder.
    pub fn image_source(&self, media_base_url: &str) -> ImageSource {
        match self.image_url.as_deref().map(str::trim) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                ImageSource::Remote(url.to_string())
            }
            Some(path) if !path.is_empty() => {
                let base = media_base_url.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                ImageSource::Remote(format!("{}/{}", base, path))
            }
            _ => ImageSource::Placeholder,
        }
    }
}

// =============================================================================
// Image Source
// =============================================================================

/// Image capability queried by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum ImageSource {
    Remote(String),
    Placeholder,
}

impl ImageSource {
    /// The source to show after the current one failed to load.
    pub fn after_load_error(&self) -> ImageSource {
        ImageSource::Placeholder
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageSource::Remote(url) => Some(url),
            ImageSource::Placeholder => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
