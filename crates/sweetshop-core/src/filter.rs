//! # Catalog Filtering
//!
//! Search and filter logic behind the sweets listing.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A sweet is shown when ALL of these hold:                               │
//! │                                                                         │
//! │  1. search term (lowercased, untrimmed) ⊂ name or description           │
//! │  2. category filter is All, or the sweet's CategoryId equals it         │
//! │  3. price within [min, max]         (bounds optional, inclusive)        │
//! │  4. stock matches the stock filter  (all / in / out / low)              │
//! │                                                                         │
//! │  Results keep catalog order unless a sort is requested; every sort     │
//! │  is stable, so ties keep catalog order too.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CatalogItem, CategoryId};
use crate::validation::validate_price_range;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Filter Types
// =============================================================================

/// Category restriction, resolved against a snapshot with
/// [`crate::catalog::CatalogSnapshot::resolve_category_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => item.category.as_ref().is_some_and(|c| &c.id == id),
        }
    }
}

/// Stock status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
    /// In stock, below the low-stock threshold.
    LowStock,
}

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Catalog,
    NameAsc,
    PriceAsc,
    PriceDesc,
    StockDesc,
}

// =============================================================================
// Search
// =============================================================================

/// Case-insensitive substring match on name or description.
///
/// An empty term matches every sweet.
pub fn matches_search(item: &CatalogItem, term: &str) -> bool {
    let term = term.to_lowercase();
    item.name.to_lowercase().contains(&term) || item.description.to_lowercase().contains(&term)
}

/// Applies the search term and category filter, preserving catalog order.
///
/// ```rust
/// use sweetshop_core::filter::{filter_sweets, CategoryFilter};
/// use sweetshop_core::types::CatalogItem;
///
/// let items: Vec<CatalogItem> = Vec::new();
/// assert!(filter_sweets(&items, "ladoo", &CategoryFilter::All).is_empty());
/// ```
pub fn filter_sweets<'a>(
    items: &'a [CatalogItem],
    term: &str,
    category: &CategoryFilter,
) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| category.matches(item) && matches_search(item, term))
        .collect()
}

// =============================================================================
// Full Query
// =============================================================================

/// Everything the filter panel can ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub stock: StockFilter,
    pub sort: SortOrder,
    /// Whole units below which an in-stock sweet counts as low.
    pub low_stock_threshold: i64,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            search: String::new(),
            category: CategoryFilter::All,
            min_price: None,
            max_price: None,
            stock: StockFilter::All,
            sort: SortOrder::Catalog,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
        }
    }
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(mut self, filter: CategoryFilter) -> Self {
        self.category = filter;
        self
    }

    pub fn price_between(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn stock(mut self, filter: StockFilter) -> Self {
        self.stock = filter;
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    pub fn low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Runs the query over `items`.
    ///
    /// The search term is matched exactly as typed: surrounding spaces are
    /// part of it, and a term that fits no sweet just yields no results.
    /// Fails only when the price range is invalid; nothing is filtered in
    /// that case.
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> CoreResult<Vec<&'a CatalogItem>> {
        validate_price_range(self.min_price, self.max_price)?;

        let mut matched: Vec<&CatalogItem> = filter_sweets(items, &self.search, &self.category)
            .into_iter()
            .filter(|item| self.matches_price(item) && self.matches_stock(item))
            .collect();

        self.sort_items(&mut matched);
        Ok(matched)
    }

    fn matches_price(&self, item: &CatalogItem) -> bool {
        self.min_price.map_or(true, |min| item.price >= min)
            && self.max_price.map_or(true, |max| item.price <= max)
    }

    fn matches_stock(&self, item: &CatalogItem) -> bool {
        match self.stock {
            StockFilter::All => true,
            StockFilter::InStock => item.is_in_stock(),
            StockFilter::OutOfStock => !item.is_in_stock(),
            StockFilter::LowStock => item.is_low_stock(self.low_stock_threshold),
        }
    }

    fn sort_items(&self, items: &mut [&CatalogItem]) {
        let compare: fn(&&CatalogItem, &&CatalogItem) -> Ordering = match self.sort {
            SortOrder::Catalog => return,
            SortOrder::NameAsc => |a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::PriceAsc => |a, b| a.price.cmp(&b.price),
            SortOrder::PriceDesc => |a, b| b.price.cmp(&a.price),
            SortOrder::StockDesc => |a, b| b.stock.cmp(&a.stock),
        };
        items.sort_by(compare);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::{Quantity, Unit};
    use crate::types::{Category, ItemId};

    fn sweet(id: i64, name: &str, description: &str, price: i64, stock: i64, category: Option<i64>) -> CatalogItem {
        CatalogItem {
            id: ItemId::Numeric(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Money::from_major(price),
            unit: Unit::Kilogram,
            stock: Quantity::whole(stock),
            category: category.map(|c| Category {
                id: CategoryId::Numeric(c),
                name: format!("Category {}", c),
            }),
            image_url: None,
        }
    }

    fn catalog() -> Vec<CatalogItem> {
        vec![
            sweet(1, "Rasgulla", "Soft spongy balls in syrup", 280, 15, Some(1)),
            sweet(2, "Gulab Jamun", "Fried milk balls", 320, 12, Some(1)),
            sweet(3, "Kaju Katli", "Cashew fudge", 450, 8, Some(2)),
            sweet(4, "Motichoor Ladoo", "Tiny boondi pearls", 380, 0, Some(3)),
            sweet(5, "Barfi", "Milk fudge", 300, 5, None),
        ]
    }

    fn ids(items: &[&CatalogItem]) -> Vec<i64> {
        items
            .iter()
            .map(|item| match item.id {
                ItemId::Numeric(id) => id,
                ItemId::Text(_) => -1,
            })
            .collect()
    }

    #[test]
    fn test_search_matches_name_or_description_case_insensitive() {
        let items = catalog();
        assert_eq!(ids(&filter_sweets(&items, "BALLS", &CategoryFilter::All)), vec![1, 2]);
        assert_eq!(ids(&filter_sweets(&items, "katli", &CategoryFilter::All)), vec![3]);
        assert_eq!(ids(&filter_sweets(&items, "fudge", &CategoryFilter::All)), vec![3, 5]);
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let items = catalog();
        assert_eq!(ids(&filter_sweets(&items, "", &CategoryFilter::All)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_filter() {
        let items = catalog();
        let milk = CategoryFilter::Only(CategoryId::Numeric(1));
        assert_eq!(ids(&filter_sweets(&items, "", &milk)), vec![1, 2]);
        assert_eq!(ids(&filter_sweets(&items, "fudge", &milk)), Vec::<i64>::new());

        // Uncategorized sweets only show under All.
        let fudge = filter_sweets(&items, "fudge", &CategoryFilter::Only(CategoryId::Numeric(2)));
        assert_eq!(ids(&fudge), vec![3]);
    }

    #[test]
    fn test_query_price_range_inclusive() {
        let items = catalog();
        let query = CatalogQuery::new()
            .price_between(Some(Money::from_major(300)), Some(Money::from_major(380)));
        assert_eq!(ids(&query.apply(&items).unwrap()), vec![2, 4, 5]);
    }

    #[test]
    fn test_query_stock_filters() {
        let items = catalog();
        let run = |filter| ids(&CatalogQuery::new().stock(filter).apply(&items).unwrap());

        assert_eq!(run(StockFilter::InStock), vec![1, 2, 3, 5]);
        assert_eq!(run(StockFilter::OutOfStock), vec![4]);
        assert_eq!(run(StockFilter::LowStock), vec![3, 5]);
    }

    #[test]
    fn test_query_sorts_are_stable() {
        let mut items = catalog();
        items.push(sweet(6, "Peda", "Milk sweet", 280, 15, Some(1)));

        let by = |order| ids(&CatalogQuery::new().sort(order).apply(&items).unwrap());
        assert_eq!(by(SortOrder::PriceAsc), vec![1, 6, 5, 2, 4, 3]);
        assert_eq!(by(SortOrder::PriceDesc), vec![3, 4, 2, 5, 1, 6]);
        assert_eq!(by(SortOrder::StockDesc), vec![1, 6, 2, 3, 5, 4]);
        assert_eq!(by(SortOrder::NameAsc), vec![5, 2, 3, 4, 6, 1]);
        assert_eq!(by(SortOrder::Catalog), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_query_rejects_bad_input() {
        let items = catalog();
        assert!(CatalogQuery::new()
            .price_between(Some(Money::from_major(500)), Some(Money::from_major(100)))
            .apply(&items)
            .is_err());
    }

    #[test]
    fn test_query_search_term_is_not_trimmed() {
        let items = catalog();
        assert_eq!(ids(&CatalogQuery::new().search("jamun").apply(&items).unwrap()), vec![2]);
        assert!(CatalogQuery::new().search("jamun ").apply(&items).unwrap().is_empty());
        // "Gulab Jamun" contains the leading space.
        assert_eq!(ids(&CatalogQuery::new().search(" jamun").apply(&items).unwrap()), vec![2]);
    }

    #[test]
    fn test_query_long_search_term_matches_nothing() {
        let items = catalog();
        let matched = CatalogQuery::new().search("x".repeat(101)).apply(&items).unwrap();
        assert!(matched.is_empty());
    }
}
