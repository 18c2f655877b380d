//! # Wishlist Store
//!
//! The persistent wishlist container. Same mutation pipeline as the cart
//! store (lock → mutate → write-through → broadcast), but over a product set
//! instead of quantity lines.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use shopfront_core::{Product, ProductId, Wishlist};
use shopfront_persist::SlotStorage;

/// Durable slot name for the wishlist.
pub const WISHLIST_SLOT: &str = "wishlist";

const EVENT_CAPACITY: usize = 16;

/// Immutable view of the wishlist handed to subscribers and renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistSnapshot {
    pub items: Vec<Product>,
}

impl From<&Wishlist> for WishlistSnapshot {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistSnapshot {
            items: wishlist.items().to_vec(),
        }
    }
}

/// The persistent wishlist container.
#[derive(Debug)]
pub struct WishlistStore {
    wishlist: Mutex<Wishlist>,
    storage: SlotStorage,
    events: broadcast::Sender<WishlistSnapshot>,
}

impl WishlistStore {
    /// Creates the store, rehydrating from the `wishlist` slot.
    ///
    /// Missing or corrupt slots yield the empty wishlist; rehydrated state
    /// is deduplicated so set semantics hold even over a tampered slot file.
    pub fn load(storage: SlotStorage) -> Self {
        let mut wishlist: Wishlist = storage.read(WISHLIST_SLOT).unwrap_or_default();
        wishlist.sanitize();

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        WishlistStore {
            wishlist: Mutex::new(wishlist),
            storage,
            events,
        }
    }

    /// Subscribes to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<WishlistSnapshot> {
        self.events.subscribe()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Saves a product. Adding an already-saved product is a no-op.
    pub fn add(&self, product: Product) -> WishlistSnapshot {
        debug!(product_id = product.id, "wishlist add");
        self.mutate(|wishlist| {
            wishlist.add(product);
        })
    }

    /// Removes a saved product. No-op when absent.
    pub fn remove(&self, product_id: ProductId) -> WishlistSnapshot {
        debug!(product_id, "wishlist remove");
        self.mutate(|wishlist| {
            wishlist.remove(product_id);
        })
    }

    /// Empties the wishlist unconditionally.
    pub fn clear(&self) -> WishlistSnapshot {
        debug!("wishlist clear");
        self.mutate(Wishlist::clear)
    }

    // ── Readers ──────────────────────────────────────────────────────

    /// Membership check by product id.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.with_wishlist(|w| w.contains(product_id))
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> WishlistSnapshot {
        self.with_wishlist(|w| WishlistSnapshot::from(w))
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("wishlist mutex poisoned");
        f(&wishlist)
    }

    // ── Internals ────────────────────────────────────────────────────

    fn mutate<F>(&self, f: F) -> WishlistSnapshot
    where
        F: FnOnce(&mut Wishlist),
    {
        let snapshot = {
            let mut wishlist = self.wishlist.lock().expect("wishlist mutex poisoned");
            f(&mut wishlist);

            if let Err(err) = self.storage.write(WISHLIST_SLOT, &*wishlist) {
                warn!(error = %err, "wishlist slot write failed; in-memory state kept");
            }

            WishlistSnapshot::from(&*wishlist)
        };

        let _ = self.events.send(snapshot.clone());
        snapshot
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
