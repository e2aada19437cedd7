//! # Order Submission
//!
//! The async boundary between the cart and the backend's order endpoint.
//!
//! ```text
//! ┌──────────────┐  OrderRequest   ┌──────────────────┐  POST /orders/create/
//! │  checkout()  │ ──────────────► │  OrderSubmitter  │ ─────────────────────► backend
//! │              │ ◄────────────── │                  │ ◄─────────────────────
//! └──────────────┘  Confirmation   └──────────────────┘  { "order_number": ... }
//!                   or SubmitError
//! ```
//!
//! Submission is attempted once per checkout. Retrying is the shopper's call.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sweetshop_core::OrderRequest;
use thiserror::Error;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::state::AuthToken;

// =============================================================================
// Types
// =============================================================================

/// The backend's acknowledgement of a created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    #[serde(alias = "order_number")]
    pub order_id: String,
}

/// Why an order was not created.
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// The backend refused the bearer token.
    #[error("Not authenticated")]
    Unauthorized,

    /// The backend rejected the order (stock ran out, validation failed...).
    #[error("Order rejected: {0}")]
    Rejected(String),

    /// The request never got an answer.
    #[error("Order service unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Submitter Trait
// =============================================================================

/// Sends an order payload to the backend.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(
        &self,
        token: &AuthToken,
        order: OrderRequest,
    ) -> Result<OrderConfirmation, SubmitError>;
}

// =============================================================================
// In-Memory Submitter
// =============================================================================

#[derive(Debug, Default)]
struct InMemorySubmitterState {
    submitted: Vec<(String, OrderRequest)>,
    failure: Option<SubmitError>,
}

/// Order submitter that keeps orders in memory. Used by tests and the
/// offline demo.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderSubmitter {
    state: Arc<Mutex<InMemorySubmitterState>>,
}

impl InMemoryOrderSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following submission fail with `error` (`None` restores
    /// normal behavior).
    pub async fn set_failure(&self, error: Option<SubmitError>) {
        self.state.lock().await.failure = error;
    }

    /// Number of orders accepted so far.
    pub async fn order_count(&self) -> usize {
        self.state.lock().await.submitted.len()
    }

    /// Accepted orders, oldest first.
    pub async fn orders(&self) -> Vec<(String, OrderRequest)> {
        self.state.lock().await.submitted.clone()
    }
}

#[async_trait]
impl OrderSubmitter for InMemoryOrderSubmitter {
    async fn submit(
        &self,
        token: &AuthToken,
        order: OrderRequest,
    ) -> Result<OrderConfirmation, SubmitError> {
        let mut state = self.state.lock().await;

        if let Some(error) = &state.failure {
            return Err(error.clone());
        }

        if token.is_blank() {
            return Err(SubmitError::Unauthorized);
        }

        if order.items.is_empty() {
            return Err(SubmitError::Rejected("order has no items".to_string()));
        }

        let order_id = format!("ORD-{}", Uuid::new_v4().simple());
        state.submitted.push((order_id.clone(), order));

        Ok(OrderConfirmation { order_id })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
