//! # Cart Commands
//!
//! Commands behind the cart panel and the "Add to Cart" buttons.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │          │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart        checkout                           │
//! │                   update_cart_item   (checkout.rs)                      │
//! │                   step_cart_item                                        │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use sweetshop_core::{normalize_quantity, CartEngine, CartLine, Catalog, ItemId, Money, Quantity};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, SessionContext, StorefrontConfig};

// =============================================================================
// Responses
// =============================================================================

/// A cart line plus its computed total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub line_total: Money,
    pub display_line_total: String,
}

/// Cart summary shown under the lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total: Money,
    pub display_total: String,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineView>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn build(cart: &CartEngine, config: &StorefrontConfig) -> Self {
        let items = cart
            .lines()
            .iter()
            .map(|line| {
                let line_total = line.line_total();
                CartLineView {
                    line: line.clone(),
                    line_total,
                    display_line_total: config.format_money(line_total),
                }
            })
            .collect();

        let total = cart.total();
        CartResponse {
            items,
            totals: CartTotals {
                line_count: cart.line_count(),
                total,
                display_total: config.format_money(total),
            },
        }
    }
}

/// Direction of the +/- buttons next to a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    Increment,
    Decrement,
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(session: &SessionContext, config: &StorefrontConfig) -> CartResponse {
    debug!("get_cart command");
    CartResponse::build(&session.cart, config)
}

/// Adds a sweet to the cart.
///
/// ## Behavior
/// - `quantity` is raw picker input in the sweet's unit; `None` adds one
///   of the sweet's unit
/// - The line is clamped to the sweet's stock
/// - Out-of-stock sweets are not added
///
/// ## Arguments
/// * `item_id` - Sweet to add
/// * `quantity` - Picker value (grams for gram-priced sweets)
pub fn add_to_cart(
    session: &mut SessionContext,
    catalog: &CatalogState,
    config: &StorefrontConfig,
    item_id: ItemId,
    quantity: Option<f64>,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, quantity = ?quantity, "add_to_cart command");

    let item = catalog
        .get_item(&item_id)
        .ok_or_else(|| ApiError::not_found("Sweet", &item_id.to_string()))?;

    let requested = match quantity {
        Some(raw) => normalize_quantity(item.unit, raw)?,
        None => item.unit.one(),
    };

    if session.cart.add_item(item, requested).is_none() {
        debug!(item_id = %item_id, "Nothing added (out of stock or zero quantity)");
    }

    Ok(CartResponse::build(&session.cart, config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Otherwise clamped to `[minimum, stock]` for the sweet
pub fn update_cart_item(
    session: &mut SessionContext,
    catalog: &CatalogState,
    config: &StorefrontConfig,
    item_id: ItemId,
    quantity: f64,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, quantity = %quantity, "update_cart_item command");

    let quantity = if quantity <= 0.0 {
        Quantity::zero()
    } else {
        let item = catalog
            .get_item(&item_id)
            .ok_or_else(|| ApiError::not_found("Sweet", &item_id.to_string()))?;
        normalize_quantity(item.unit, quantity)?
    };

    session.cart.update_quantity(catalog, &item_id, quantity)?;
    Ok(CartResponse::build(&session.cart, config))
}

/// Moves a line one step up or down (0.1 kg, 1 g or one piece).
///
/// Stepping below zero removes the line.
pub fn step_cart_item(
    session: &mut SessionContext,
    catalog: &CatalogState,
    config: &StorefrontConfig,
    item_id: ItemId,
    direction: StepDirection,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, direction = ?direction, "step_cart_item command");

    let item = catalog
        .get_item(&item_id)
        .ok_or_else(|| ApiError::not_found("Sweet", &item_id.to_string()))?;
    let current = session
        .cart
        .line(&item_id)
        .map(|line| line.quantity)
        .ok_or_else(|| ApiError::not_found("Cart line", &item_id.to_string()))?;

    let step = item.unit.step();
    let next = match direction {
        StepDirection::Increment => current + step,
        StepDirection::Decrement => current - step,
    };

    session.cart.update_quantity(catalog, &item_id, next)?;
    Ok(CartResponse::build(&session.cart, config))
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart(
    session: &mut SessionContext,
    config: &StorefrontConfig,
    item_id: ItemId,
) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");
    session.cart.remove_item(&item_id);
    CartResponse::build(&session.cart, config)
}

/// Clears all lines from the cart.
pub fn clear_cart(session: &mut SessionContext, config: &StorefrontConfig) -> CartResponse {
    debug!("clear_cart command");
    session.cart.clear();
    CartResponse::build(&session.cart, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LoginResponse;
    use sweetshop_core::CatalogSnapshot;

    fn setup() -> (SessionContext, CatalogState, StorefrontConfig) {
        let snapshot = CatalogSnapshot::from_json(
            r#"[
                {"id": 1, "name": "Rasgulla", "price": "280.00", "unit": "kg", "stock": 15},
                {"id": 2, "name": "Gulab Jamun", "price": "320.00", "unit": "kg", "stock": 12},
                {"id": 3, "name": "Kaju Katli", "price": "0.45", "unit": "g", "stock": 2000},
                {"id": 4, "name": "Motichoor Ladoo", "price": "380.00", "unit": "kg", "stock": 0},
                {"id": 5, "name": "Soan Papdi", "price": "120.00", "unit": "boxes", "stock": 2.5}
            ]"#,
            None,
        )
        .unwrap();
        let session = SessionContext::login(
            "asha@example.com",
            LoginResponse {
                access: "jwt-1".to_string(),
            },
        )
        .unwrap();
        (session, CatalogState::with_snapshot(snapshot), StorefrontConfig::default())
    }

    #[test]
    fn test_add_to_cart_totals() {
        let (mut session, catalog, config) = setup();

        add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(1), Some(2.0)).unwrap();
        let response = add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(2), None).unwrap();

        assert_eq!(response.totals.line_count, 2);
        assert_eq!(response.totals.total, Money::from_major(880));
        assert_eq!(response.totals.display_total, "₹880.00");
    }

    #[test]
    fn test_add_grams() {
        let (mut session, catalog, config) = setup();

        let response =
            add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(3), Some(250.0)).unwrap();
        assert_eq!(response.items[0].line.quantity, Quantity::from_millis(250));
        assert_eq!(response.items[0].display_line_total, "₹112.50");
    }

    #[test]
    fn test_add_boxes_against_fractional_stock() {
        let (mut session, catalog, config) = setup();

        let response =
            add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(5), Some(3.0)).unwrap();
        assert_eq!(response.items[0].line.quantity, Quantity::whole(2));
        assert_eq!(response.totals.display_total, "₹240.00");

        let payload = session.cart.build_order_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap()["items"][0]["quantity"],
            serde_json::json!(2)
        );
    }

    #[test]
    fn test_add_out_of_stock_leaves_cart() {
        let (mut session, catalog, config) = setup();
        let response = add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(4), None).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_add_unknown_and_invalid() {
        let (mut session, catalog, config) = setup();
        assert!(add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(99), None).is_err());

        let err = add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(1), Some(-1.0))
            .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidQuantity);
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_update_and_remove() {
        let (mut session, catalog, config) = setup();
        add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(1), None).unwrap();

        let response =
            update_cart_item(&mut session, &catalog, &config, ItemId::Numeric(1), 40.0).unwrap();
        assert_eq!(response.items[0].line.quantity, Quantity::whole(15));

        let response =
            update_cart_item(&mut session, &catalog, &config, ItemId::Numeric(1), 0.0).unwrap();
        assert!(response.items.is_empty());

        let response = remove_from_cart(&mut session, &config, ItemId::Numeric(1));
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_step_cart_item() {
        let (mut session, catalog, config) = setup();
        add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(1), Some(0.2)).unwrap();

        let response = step_cart_item(
            &mut session,
            &catalog,
            &config,
            ItemId::Numeric(1),
            StepDirection::Increment,
        )
        .unwrap();
        assert_eq!(response.items[0].line.quantity, Quantity::from_millis(300));

        for _ in 0..3 {
            step_cart_item(&mut session, &catalog, &config, ItemId::Numeric(1), StepDirection::Decrement)
                .unwrap();
        }
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let (mut session, catalog, config) = setup();
        add_to_cart(&mut session, &catalog, &config, ItemId::Numeric(1), None).unwrap();
        let response = clear_cart(&mut session, &config);
        assert_eq!(response.totals.total, Money::zero());
    }
}
