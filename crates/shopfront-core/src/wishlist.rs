//! # Wishlist
//!
//! A set of saved products, ordered by insertion for display.
//!
//! Unlike the cart, the wishlist has no quantities and no totals: each
//! product is either in or out. Adding an already-saved product is a no-op,
//! which makes `add` idempotent regardless of call order or repetition.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Product, ProductId};

/// The wishlist.
///
/// ## Invariants
/// - Each product id appears at most once (set semantics)
/// - Entries keep insertion order; the order carries no other meaning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Adds a product snapshot.
    ///
    /// Returns `true` if the product was added, `false` if it was already
    /// present (in which case nothing changes).
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(product);
        true
    }

    /// Removes the entry for `product_id`.
    ///
    /// Returns `true` if an entry was removed; removing an absent product
    /// is a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != product_id);
        self.items.len() != before
    }

    /// Membership check by product id.
    #[inline]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Clears all entries unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Repairs a wishlist rehydrated from durable storage by dropping
    /// duplicate product ids (first occurrence wins).
    pub fn sanitize(&mut self) {
        let mut seen: Vec<ProductId> = Vec::with_capacity(self.items.len());
        self.items.retain(|p| {
            if seen.contains(&p.id) {
                return false;
            }
            seen.push(p.id);
            true
        });
    }

    /// Returns the entries in insertion order.
    #[inline]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
