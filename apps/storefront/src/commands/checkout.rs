//! # Checkout Command
//!
//! Turns the cart into an order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout                                          │
//! │                                                                         │
//! │  1. build_order_payload() ──── empty cart? ──► EMPTY_CART (no request)  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  2. submitter.submit(token, payload)   (one attempt, no retry)          │
//! │           │                                                             │
//! │     ┌─────┴──────┐                                                      │
//! │     ▼            ▼                                                      │
//! │  Ok(order)    Err(e)                                                    │
//! │     │            │                                                      │
//! │     ▼            ▼                                                      │
//! │  cart cleared  cart untouched, error shown                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sweetshop_core::Money;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{SessionContext, StorefrontConfig};
use crate::submitter::OrderSubmitter;

/// What the confirmation screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_id: String,
    pub line_count: usize,
    pub total: Money,
    pub display_total: String,
}

/// Places an order for everything in the session's cart.
///
/// ## Errors
/// - `EMPTY_CART` when there is nothing to order
/// - `SUBMIT_FAILED` / `NOT_AUTHENTICATED` when the order service refuses;
///   the cart is left as it was
pub async fn checkout<S>(
    session: &mut SessionContext,
    submitter: &S,
    config: &StorefrontConfig,
) -> Result<CheckoutReceipt, ApiError>
where
    S: OrderSubmitter + ?Sized,
{
    debug!(lines = session.cart.line_count(), "checkout command");

    let payload = session.cart.build_order_payload()?;
    let line_count = payload.items.len();
    let total = session.cart.total();

    match submitter.submit(session.token(), payload).await {
        Ok(confirmation) => {
            session.cart.on_checkout_succeeded();
            info!(
                order_id = %confirmation.order_id,
                lines = line_count,
                total = %total,
                "Order placed"
            );
            Ok(CheckoutReceipt {
                order_id: confirmation.order_id,
                line_count,
                total,
                display_total: config.format_money(total),
            })
        }
        Err(e) => {
            warn!(error = %e, "Checkout failed, cart kept");
            Err(e.into())
        }
    }
}
