//! # Checkout
//!
//! The mocked checkout flow: validate the form, pretend to charge the card
//! for a fixed delay, clear the cart, hand back a confirmation.
//!
//! There is deliberately no declined-payment path - the storefront does not
//! model real payment processing. The only ways an order fails are an
//! invalid form and an empty cart, both caught before the simulated
//! processing starts, so the cart is never touched on failure.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};
use uuid::Uuid;

use shopfront_core::validation::CheckoutForm;
use shopfront_core::{Money, ValidationError};

use crate::cart::CartStore;

/// How long the pretend payment processor "thinks".
pub const PAYMENT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// Types
// =============================================================================

/// Why an order was not placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The checkout form failed validation.
    #[error("checkout form invalid: {0}")]
    Validation(#[from] ValidationError),

    /// There is nothing to buy.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}

/// Receipt for a successfully placed (mock) order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub total_items: u64,
    pub total_price: Money,
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Flow
// =============================================================================

/// Places an order for the current cart contents.
///
/// ## Sequence
/// 1. Validate the form (first violation aborts, cart untouched)
/// 2. Reject an empty cart
/// 3. Simulate payment processing for [`PAYMENT_PROCESSING_DELAY`]
/// 4. Clear the cart and return the confirmation
///
/// The confirmation totals are the ones the customer saw when they clicked
/// "place order", captured before the simulated processing.
pub async fn place_order(
    cart: &CartStore,
    form: &CheckoutForm,
) -> Result<OrderConfirmation, CheckoutError> {
    form.validate()?;

    let totals = cart.snapshot().totals;
    if totals.total_items == 0 {
        return Err(CheckoutError::EmptyCart);
    }

    debug!(
        total_items = totals.total_items,
        total_price = %totals.total_price,
        "processing order"
    );
    sleep(PAYMENT_PROCESSING_DELAY).await;

    cart.clear();

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        total_items: totals.total_items,
        total_price: totals.total_price,
        placed_at: Utc::now(),
    };
    info!(order_id = %confirmation.order_id, "order placed");

    Ok(confirmation)
}

// =============================================================================
// Unit Tests
// =============================================================================
