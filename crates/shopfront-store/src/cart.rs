//! # Cart Store
//!
//! The persistent cart container.
//!
//! ## Thread Safety
//! The cart is wrapped in a `Mutex` because:
//! 1. Multiple presentation contexts may access/modify the cart
//! 2. Only one mutation may run at a time
//! 3. Readers must never observe totals that disagree with the lines
//!
//! ## Mutation Pipeline
//! Every mutation follows the same sequence while holding the lock:
//! mutate in memory → write-through to the `cart` slot → release → broadcast
//! a snapshot. A failed slot write is logged and NEVER rolls back the
//! in-memory mutation - the in-memory state is authoritative.

use std::sync::Mutex;

use tokio::sync::broadcast;
use tracing::{debug, warn};

use serde::{Deserialize, Serialize};
use shopfront_core::{Cart, CartLine, CartTotals, Money, Product, ProductId};
use shopfront_persist::SlotStorage;

/// Durable slot name for the cart.
pub const CART_SLOT: &str = "cart";

/// Capacity of the change-notification channel. Slow subscribers that lag
/// more than this many snapshots behind see `Lagged` and resync via
/// [`CartStore::snapshot`].
const EVENT_CAPACITY: usize = 16;

// =============================================================================
// Snapshot
// =============================================================================

/// Immutable view of the cart handed to subscribers and renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// The persistent cart container.
///
/// Constructed explicitly and passed by reference to whatever presentation
/// context needs it; change notification happens over an explicit
/// subscription, not ambient global state.
#[derive(Debug)]
pub struct CartStore {
    cart: Mutex<Cart>,
    storage: SlotStorage,
    events: broadcast::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates the store, rehydrating from the `cart` slot.
    ///
    /// A missing or corrupt slot yields the documented empty initial state.
    /// Rehydrated state is sanitized first: a tampered slot file must not
    /// smuggle in zero-quantity lines or duplicate product ids.
    pub fn load(storage: SlotStorage) -> Self {
        let mut cart: Cart = storage.read(CART_SLOT).unwrap_or_default();
        cart.sanitize();

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        CartStore {
            cart: Mutex::new(cart),
            storage,
            events,
        }
    }

    /// Subscribes to change notifications.
    ///
    /// Every mutation publishes one [`CartSnapshot`] after it completes, so
    /// a subscriber that processes messages in order always converges on the
    /// current state.
    pub fn subscribe(&self) -> broadcast::Receiver<CartSnapshot> {
        self.events.subscribe()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Adds a product to the cart, aggregating onto an existing line.
    ///
    /// `quantity` is clamped to at least 1 - this is the public hook, and a
    /// zero from a glitchy quantity stepper means "add one", never "add
    /// nothing".
    pub fn add_item(&self, product: &Product, quantity: u32) -> CartSnapshot {
        let quantity = quantity.max(1);
        debug!(product_id = product.id, quantity, "cart add_item");
        self.mutate(|cart| cart.add_line(product, quantity))
    }

    /// Removes the line for `product_id`. No-op when absent.
    pub fn remove_item(&self, product_id: ProductId) -> CartSnapshot {
        debug!(product_id, "cart remove_item");
        self.mutate(|cart| cart.remove_line(product_id))
    }

    /// Sets the quantity of a line to an absolute value.
    ///
    /// A quantity of 0 removes the line; an unknown `product_id` is a silent
    /// no-op (see [`Cart::set_quantity`] for the contract).
    pub fn update_quantity(&self, product_id: ProductId, quantity: u32) -> CartSnapshot {
        debug!(product_id, quantity, "cart update_quantity");
        self.mutate(|cart| cart.set_quantity(product_id, quantity))
    }

    /// Empties the cart unconditionally.
    pub fn clear(&self) -> CartSnapshot {
        debug!("cart clear");
        self.mutate(Cart::clear)
    }

    // ── Readers ──────────────────────────────────────────────────────

    /// Total quantity across all lines.
    pub fn total_items(&self) -> u64 {
        self.with_cart(Cart::total_items)
    }

    /// Total price across all lines.
    pub fn total_price(&self) -> Money {
        self.with_cart(Cart::total_price)
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.with_cart(|cart| CartSnapshot::from(cart))
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Runs a mutation under the lock, then persists and notifies.
    fn mutate<F>(&self, f: F) -> CartSnapshot
    where
        F: FnOnce(&mut Cart),
    {
        let snapshot = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            f(&mut cart);

            // Write-through under the lock: this store is the sole writer of
            // its slot, and holding the lock keeps slot contents in mutation
            // order.
            if let Err(err) = self.storage.write(CART_SLOT, &*cart) {
                warn!(error = %err, "cart slot write failed; in-memory state kept");
            }

            CartSnapshot::from(&*cart)
        };

        // A send only fails when nobody subscribed - not an anomaly
        let _ = self.events.send(snapshot.clone());
        snapshot
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
