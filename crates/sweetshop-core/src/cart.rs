//! # Cart Engine
//!
//! The shopper's cart: one line per sweet, quantities in base units,
//! clamped to live stock on every edit.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  View Action              Engine Call              Cart Change          │
//! │  ───────────              ───────────              ───────────          │
//! │                                                                         │
//! │  Add to Cart ───────────► add_item() ────────────► push / grow, clamp   │
//! │                                                                         │
//! │  Change Quantity ───────► update_quantity() ─────► set, clamp           │
//! │                            (<= 0 ⇒ remove)                              │
//! │                                                                         │
//! │  Click Remove ──────────► remove_item() ─────────► retain (no-op if     │
//! │                                                     absent)             │
//! │                                                                         │
//! │  Place Order ───────────► build_order_payload() ─► (read only)          │
//! │                                                                         │
//! │  Order Confirmed ───────► on_checkout_succeeded() ► clear               │
//! │                                                                         │
//! │  Catalog Refreshed ─────► reconcile() ───────────► re-clamp every line  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Line Lifecycle
//! `absent → present(quantity > 0) → absent`. A line never holds zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::quantity::{Quantity, Unit};
use crate::types::{CatalogItem, ItemId};

// =============================================================================
// Cart Line
// =============================================================================

/// One sweet and its quantity in the cart.
///
/// ## Design Notes
/// - `item_id` references the catalog; it does not own the item.
/// - `name`, `unit` and `unit_price` are refreshed from the catalog item on
///   every mutation, so totals always use the latest price seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    #[ts(type = "string | number")]
    pub item_id: ItemId,

    pub name: String,

    pub unit: Unit,

    /// Price per base unit (per kg for weight items).
    pub unit_price: Money,

    /// Quantity in the base unit. Always positive.
    #[ts(type = "number")]
    pub quantity: Quantity,
}

impl CartLine {
    fn new(item: &CatalogItem, quantity: Quantity) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            unit: item.unit,
            unit_price: item.unit_price(),
            quantity,
        }
    }

    fn refresh_from(&mut self, item: &CatalogItem) {
        self.name.clone_from(&item.name);
        self.unit = item.unit;
        self.unit_price = item.unit_price();
    }

    /// `unit_price × quantity`, exact to the paisa.
    pub fn line_total(&self) -> Money {
        self.unit_price.times_quantity(self.quantity)
    }
}

// =============================================================================
// Order Payload
// =============================================================================

/// Body of the order creation request.
///
/// ```json
/// { "items": [ { "sweet_id": 1, "quantity": 2 }, { "sweet_id": 2, "quantity": 0.25 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "sweet_id")]
    pub item_id: ItemId,
    pub quantity: Quantity,
}

// =============================================================================
// Reconciliation
// =============================================================================

/// Why a line left the cart during reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// The sweet is no longer in the catalog.
    Discontinued,
    /// The sweet is in the catalog with zero stock.
    OutOfStock,
}

/// A change [`CartEngine::reconcile`] made to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineAdjustment {
    Removed {
        item_id: ItemId,
        reason: RemovalReason,
    },
    Clamped {
        item_id: ItemId,
        from: Quantity,
        to: Quantity,
    },
    Repriced {
        item_id: ItemId,
        from: Money,
        to: Money,
    },
}

// =============================================================================
// Cart Engine
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per `item_id`
/// - `0 < quantity <= stock` for every line, against the stock seen at the
///   line's last mutation
/// - Lines keep the order of their first add
///
/// Every failed operation leaves the cart unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEngine {
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Default for CartEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CartEngine {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartEngine {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `requested` (base units) of `item`, or grows its existing line.
    ///
    /// ## Behavior
    /// - New line: `min(requested, stock)`
    /// - Existing line: `min(existing + requested, stock)`
    /// - `stock <= 0`: nothing is added; an existing line for the sweet is
    ///   dropped since it can no longer be satisfied
    /// - `requested <= 0`: no-op
    /// - Discrete units round `requested` to a whole count first, so 0.4
    ///   pieces is a no-op and 2.5 boxes asks for 3
    ///
    /// ## Returns
    /// The updated line, or `None` when the cart holds no line for the item
    /// afterwards.
    pub fn add_item(&mut self, item: &CatalogItem, requested: Quantity) -> Option<&CartLine> {
        let ceiling = item.stock_ceiling();
        let position = self.position(&item.id);
        let requested = item.unit.conform(requested);

        if !ceiling.is_positive() {
            if let Some(index) = position {
                self.lines.remove(index);
            }
            return None;
        }

        if !requested.is_positive() {
            return position.map(|index| &self.lines[index]);
        }

        match position {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(requested).min(ceiling);
                line.refresh_from(item);
                Some(&self.lines[index])
            }
            None => {
                self.lines.push(CartLine::new(item, requested.min(ceiling)));
                self.lines.last()
            }
        }
    }

    /// Adds one of the item's own unit (1 kg, 1 g, 1 piece...).
    pub fn add_one(&mut self, item: &CatalogItem) -> Option<&CartLine> {
        self.add_item(item, item.unit.one())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`CartEngine::remove_item`]
    /// - Otherwise rounded to a whole count for discrete units, then clamped
    ///   to `[min_quantity(unit), stock]` using the item's current catalog
    ///   entry
    /// - Fresh stock of zero removes the line
    ///
    /// ## Errors
    /// [`CoreError::ItemNotFound`] when the item is missing from the catalog
    /// or has no line in the cart. The cart is unchanged.
    pub fn update_quantity<C>(
        &mut self,
        catalog: &C,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> CoreResult<Option<&CartLine>>
    where
        C: Catalog + ?Sized,
    {
        if !quantity.is_positive() {
            self.remove_item(item_id);
            return Ok(None);
        }

        let item = catalog
            .get_item(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.clone()))?;
        let index = self
            .position(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.clone()))?;

        let ceiling = item.stock_ceiling();
        if !ceiling.is_positive() {
            self.lines.remove(index);
            return Ok(None);
        }

        let line = &mut self.lines[index];
        line.quantity = item.unit.conform(quantity).max(item.min_quantity()).min(ceiling);
        line.refresh_from(item);
        Ok(Some(&self.lines[index]))
    }

    /// Removes the line for `item_id`. Absent ids are a no-op.
    ///
    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, item_id: &ItemId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|line| &line.item_id != item_id);
        self.lines.len() != initial_len
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Clears the cart once the order submitter confirmed the order.
    pub fn on_checkout_succeeded(&mut self) {
        self.clear();
    }

    /// Sum of all line totals, exact to the paisa.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in first-add order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, item_id: &ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.item_id == item_id)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Builds the order body, lines in insertion order.
    ///
    /// ## Errors
    /// [`CoreError::EmptyCart`] when there is nothing to order.
    pub fn build_order_payload(&self) -> CoreResult<OrderRequest> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(OrderRequest {
            items: self
                .lines
                .iter()
                .map(|line| OrderLine {
                    item_id: line.item_id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
        })
    }

    /// Re-checks every line against a freshly loaded catalog.
    ///
    /// Lines for sweets that vanished or sold out are dropped, quantities
    /// above the new stock are lowered, and prices are refreshed.
    pub fn reconcile<C>(&mut self, catalog: &C) -> Vec<LineAdjustment>
    where
        C: Catalog + ?Sized,
    {
        let mut adjustments = Vec::new();

        self.lines.retain_mut(|line| {
            let Some(item) = catalog.get_item(&line.item_id) else {
                adjustments.push(LineAdjustment::Removed {
                    item_id: line.item_id.clone(),
                    reason: RemovalReason::Discontinued,
                });
                return false;
            };

            let ceiling = item.stock_ceiling();
            if !ceiling.is_positive() {
                adjustments.push(LineAdjustment::Removed {
                    item_id: line.item_id.clone(),
                    reason: RemovalReason::OutOfStock,
                });
                return false;
            }

            if line.quantity > ceiling {
                adjustments.push(LineAdjustment::Clamped {
                    item_id: line.item_id.clone(),
                    from: line.quantity,
                    to: ceiling,
                });
                line.quantity = ceiling;
            }

            let price = item.unit_price();
            if price != line.unit_price {
                adjustments.push(LineAdjustment::Repriced {
                    item_id: line.item_id.clone(),
                    from: line.unit_price,
                    to: price,
                });
            }
            line.refresh_from(item);
            true
        });

        adjustments
    }

    fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.item_id == item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSnapshot;
    use crate::quantity::normalize_quantity;

    fn sweet(id: i64, price_major: i64, stock: i64, unit: Unit) -> CatalogItem {
        CatalogItem {
            id: ItemId::Numeric(id),
            name: format!("Sweet {}", id),
            description: String::new(),
            price: Money::from_major(price_major),
            unit,
            stock: Quantity::whole(stock),
            category: None,
            image_url: None,
        }
    }

    fn catalog(items: Vec<CatalogItem>) -> CatalogSnapshot {
        CatalogSnapshot::new(items, Vec::new()).unwrap()
    }

    #[test]
    fn test_add_item_creates_line_clamped_to_stock() {
        let mut cart = CartEngine::new();
        let rasgulla = sweet(1, 280, 15, Unit::Kilogram);

        let line = cart.add_item(&rasgulla, Quantity::whole(20)).unwrap();
        assert_eq!(line.quantity, Quantity::whole(15));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_repeated_adds_never_exceed_stock() {
        let mut cart = CartEngine::new();
        let katli = sweet(3, 450, 8, Unit::Kilogram);

        for _ in 0..20 {
            cart.add_one(&katli);
            assert!(cart.line(&katli.id).unwrap().quantity <= katli.stock_ceiling());
        }
        assert_eq!(cart.line(&katli.id).unwrap().quantity, Quantity::whole(8));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_out_of_stock_is_noop() {
        let mut cart = CartEngine::new();
        let ladoo = sweet(4, 380, 0, Unit::Kilogram);

        assert!(cart.add_item(&ladoo, Quantity::whole(1)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_non_positive_is_noop() {
        let mut cart = CartEngine::new();
        let barfi = sweet(5, 300, 5, Unit::Kilogram);

        assert!(cart.add_item(&barfi, Quantity::zero()).is_none());
        assert!(cart.is_empty());

        cart.add_item(&barfi, Quantity::whole(2));
        let line = cart.add_item(&barfi, Quantity::zero()).unwrap();
        assert_eq!(line.quantity, Quantity::whole(2));
    }

    #[test]
    fn test_add_after_stock_sold_out_drops_line() {
        let mut cart = CartEngine::new();
        let mut barfi = sweet(5, 300, 5, Unit::Kilogram);
        cart.add_item(&barfi, Quantity::whole(2));

        barfi.stock = Quantity::zero();
        assert!(cart.add_one(&barfi).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_between_minimum_and_stock() {
        let rasgulla = sweet(1, 280, 15, Unit::Kilogram);
        let catalog = catalog(vec![rasgulla.clone()]);
        let mut cart = CartEngine::new();
        cart.add_one(&rasgulla);

        let line = cart
            .update_quantity(&catalog, &rasgulla.id, Quantity::whole(40))
            .unwrap()
            .unwrap();
        assert_eq!(line.quantity, Quantity::whole(15));

        let line = cart
            .update_quantity(&catalog, &rasgulla.id, Quantity::from_millis(20))
            .unwrap()
            .unwrap();
        assert_eq!(line.quantity, Quantity::from_millis(100)); // 0.1 kg minimum
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let rasgulla = sweet(1, 280, 15, Unit::Kilogram);
        let jamun = sweet(2, 320, 12, Unit::Kilogram);
        let catalog = catalog(vec![rasgulla.clone(), jamun.clone()]);

        let mut updated = CartEngine::new();
        updated.add_one(&rasgulla);
        updated.add_one(&jamun);
        let mut removed = updated.clone();

        assert!(updated.update_quantity(&catalog, &rasgulla.id, Quantity::zero()).unwrap().is_none());
        removed.remove_item(&rasgulla.id);

        assert_eq!(updated.lines(), removed.lines());
    }

    #[test]
    fn test_update_unknown_item_fails_and_leaves_cart() {
        let rasgulla = sweet(1, 280, 15, Unit::Kilogram);
        let jamun = sweet(2, 320, 12, Unit::Kilogram);
        let catalog = catalog(vec![rasgulla.clone(), jamun.clone()]);
        let mut cart = CartEngine::new();
        cart.add_item(&rasgulla, Quantity::whole(2));
        let before = cart.lines().to_vec();

        // Not in the catalog.
        let err = cart
            .update_quantity(&catalog, &ItemId::Numeric(99), Quantity::whole(1))
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(ItemId::Numeric(99))));

        // In the catalog but not in the cart.
        assert!(cart.update_quantity(&catalog, &jamun.id, Quantity::whole(1)).is_err());

        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_update_reads_fresh_stock() {
        let mut rasgulla = sweet(1, 280, 15, Unit::Kilogram);
        let mut cart = CartEngine::new();
        cart.add_item(&rasgulla, Quantity::whole(10));

        rasgulla.stock = Quantity::whole(4);
        let fresh = catalog(vec![rasgulla.clone()]);
        let line = cart
            .update_quantity(&fresh, &rasgulla.id, Quantity::whole(6))
            .unwrap()
            .unwrap();
        assert_eq!(line.quantity, Quantity::whole(4));

        rasgulla.stock = Quantity::zero();
        let sold_out = catalog(vec![rasgulla.clone()]);
        assert!(cart.update_quantity(&sold_out, &rasgulla.id, Quantity::whole(1)).unwrap().is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartEngine::new();
        cart.add_one(&sweet(1, 280, 15, Unit::Kilogram));
        let before = cart.lines().to_vec();

        assert!(!cart.remove_item(&ItemId::Numeric(42)));
        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_total_is_exact() {
        let mut cart = CartEngine::new();
        cart.add_item(&sweet(1, 280, 15, Unit::Kilogram), Quantity::whole(2));
        cart.add_item(&sweet(2, 320, 12, Unit::Kilogram), Quantity::whole(1));

        assert_eq!(cart.total(), Money::from_major(880));
    }

    #[test]
    fn test_total_with_fractional_weights() {
        let mut cart = CartEngine::new();
        let per_kg = CatalogItem {
            price: Money::parse_decimal("333.33").unwrap(),
            ..sweet(1, 0, 10, Unit::Kilogram)
        };
        let per_gram = CatalogItem {
            price: Money::parse_decimal("0.45").unwrap(),
            ..sweet(2, 0, 2000, Unit::Gram)
        };

        cart.add_item(&per_kg, normalize_quantity(Unit::Kilogram, 0.3).unwrap());
        cart.add_item(&per_gram, normalize_quantity(Unit::Gram, 250.0).unwrap());

        // 333.33 × 0.3 = 99.999 → 100.00; 450.00/kg × 0.25 = 112.50
        assert_eq!(cart.lines()[0].line_total(), Money::from_minor(10000));
        assert_eq!(cart.lines()[1].line_total(), Money::from_minor(11250));
        assert_eq!(cart.total(), Money::from_minor(21250));
    }

    #[test]
    fn test_gram_items_clamp_against_kilogram_stock() {
        let mut cart = CartEngine::new();
        let ladoo = sweet(3, 1, 500, Unit::Gram); // 500 g in stock

        let line = cart
            .add_item(&ladoo, normalize_quantity(Unit::Gram, 750.0).unwrap())
            .unwrap();
        assert_eq!(line.quantity, Quantity::from_millis(500));
        assert_eq!(line.line_total(), Money::from_major(500)); // ₹1/g × 500 g
    }

    #[test]
    fn test_fractional_box_stock_sells_whole_boxes() {
        let mut cart = CartEngine::new();
        let soan_papdi = CatalogItem {
            stock: Quantity::from_millis(2500),
            ..sweet(6, 120, 0, Unit::Box)
        };

        let line = cart.add_item(&soan_papdi, Quantity::whole(3)).unwrap();
        assert_eq!(line.quantity, Quantity::whole(2));
        assert_eq!(line.line_total(), Money::from_major(240));

        let json = serde_json::to_value(cart.build_order_payload().unwrap()).unwrap();
        assert_eq!(json["items"][0]["quantity"], serde_json::json!(2));
    }

    #[test]
    fn test_discrete_requests_round_to_whole_counts() {
        let pedha = sweet(7, 15, 10, Unit::Piece);
        let catalog = catalog(vec![pedha.clone()]);
        let mut cart = CartEngine::new();

        assert!(cart.add_item(&pedha, Quantity::from_millis(400)).is_none());
        assert!(cart.is_empty());

        let line = cart.add_item(&pedha, Quantity::from_millis(2500)).unwrap();
        assert_eq!(line.quantity, Quantity::whole(3));

        let line = cart
            .update_quantity(&catalog, &pedha.id, Quantity::from_millis(4200))
            .unwrap()
            .unwrap();
        assert_eq!(line.quantity, Quantity::whole(4));
    }

    #[test]
    fn test_payload_requires_lines() {
        let cart = CartEngine::new();
        assert!(matches!(cart.build_order_payload(), Err(CoreError::EmptyCart)));
    }

    #[test]
    fn test_payload_keeps_insertion_order() {
        let rasgulla = sweet(1, 280, 15, Unit::Kilogram);
        let jamun = sweet(2, 320, 12, Unit::Kilogram);
        let catalog = catalog(vec![rasgulla.clone(), jamun.clone()]);
        let mut cart = CartEngine::new();

        cart.add_one(&rasgulla);
        cart.add_one(&jamun);
        cart.add_one(&rasgulla);
        cart.update_quantity(&catalog, &jamun.id, Quantity::whole(5)).unwrap();
        cart.update_quantity(&catalog, &rasgulla.id, Quantity::whole(3)).unwrap();

        let payload = cart.build_order_payload().unwrap();
        let ids: Vec<_> = payload.items.iter().map(|l| l.item_id.clone()).collect();
        assert_eq!(ids, vec![rasgulla.id.clone(), jamun.id.clone()]);
        assert_eq!(payload.items[0].quantity, Quantity::whole(3));
        assert_eq!(payload.items[1].quantity, Quantity::whole(5));
    }

    #[test]
    fn test_payload_json_shape() {
        let mut cart = CartEngine::new();
        cart.add_item(&sweet(1, 280, 15, Unit::Kilogram), Quantity::from_millis(250));
        cart.add_item(&sweet(2, 20, 40, Unit::Piece), Quantity::whole(3));

        let json = serde_json::to_value(cart.build_order_payload().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [
                    { "sweet_id": 1, "quantity": 0.25 },
                    { "sweet_id": 2, "quantity": 3 }
                ]
            })
        );
    }

    #[test]
    fn test_checkout_success_clears() {
        let mut cart = CartEngine::new();
        cart.add_one(&sweet(1, 280, 15, Unit::Kilogram));

        cart.on_checkout_succeeded();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_reconcile_against_refreshed_catalog() {
        let rasgulla = sweet(1, 280, 15, Unit::Kilogram);
        let jamun = sweet(2, 320, 12, Unit::Kilogram);
        let katli = sweet(3, 450, 8, Unit::Kilogram);
        let ladoo = sweet(4, 380, 10, Unit::Kilogram);

        let mut cart = CartEngine::new();
        cart.add_item(&rasgulla, Quantity::whole(5));
        cart.add_item(&jamun, Quantity::whole(2));
        cart.add_item(&katli, Quantity::whole(1));
        cart.add_item(&ladoo, Quantity::whole(1));

        let refreshed = catalog(vec![
            CatalogItem { stock: Quantity::whole(3), ..rasgulla.clone() },
            CatalogItem { price: Money::from_major(340), ..jamun.clone() },
            CatalogItem { stock: Quantity::zero(), ..katli.clone() },
        ]);

        let adjustments = cart.reconcile(&refreshed);
        assert_eq!(
            adjustments,
            vec![
                LineAdjustment::Clamped {
                    item_id: rasgulla.id.clone(),
                    from: Quantity::whole(5),
                    to: Quantity::whole(3),
                },
                LineAdjustment::Repriced {
                    item_id: jamun.id.clone(),
                    from: Money::from_major(320),
                    to: Money::from_major(340),
                },
                LineAdjustment::Removed {
                    item_id: katli.id.clone(),
                    reason: RemovalReason::OutOfStock,
                },
                LineAdjustment::Removed {
                    item_id: ladoo.id.clone(),
                    reason: RemovalReason::Discontinued,
                },
            ]
        );
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total(), Money::from_major(280 * 3 + 340 * 2));
    }
}
