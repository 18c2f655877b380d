//! # Cart
//!
//! The shopping cart: per-product lines with aggregated quantities and
//! cached totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Store Operation            Cart Mutation            Totals             │
//! │  ───────────────            ─────────────            ──────             │
//! │                                                                         │
//! │  add_item ─────────────────► aggregate or append ──► recomputed         │
//! │                                                                         │
//! │  update_quantity ──────────► absolute set (0 = remove) ─► recomputed    │
//! │                                                                         │
//! │  remove_item ──────────────► drop line ─────────────► recomputed        │
//! │                                                                         │
//! │  clear ────────────────────► empty state ───────────► zeroed            │
//! │                                                                         │
//! │  NOTE: Every mutation recomputes the cached totals from the line fold,  │
//! │        so readers can never observe totals that disagree with lines.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// One row in the cart: a single product and its aggregated quantity.
///
/// ## Design Notes
/// The line is a *snapshot* of the product at the moment it was added:
/// title, price, and image are frozen copies, so the cart displays
/// consistent data even if the catalog refreshes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product this line refers to. At most one line exists per product id.
    pub product_id: ProductId,

    /// Title at time of adding (frozen).
    pub title: String,

    /// Price in minor units at time of adding (frozen).
    pub price: Money,

    /// Image URI at time of adding (frozen).
    pub image: String,

    /// Aggregated quantity, always >= 1. A line that would drop to 0 is
    /// removed instead of stored.
    pub quantity: u32,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product snapshot and quantity.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartLine {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total (price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product aggregates
///   quantity onto the existing line)
/// - Every line has quantity >= 1 (setting a quantity to 0 removes the line)
/// - Lines keep insertion order
/// - `total_items` and `total_price` always equal the fold over the lines;
///   they are cached for cheap reads and recomputed after every mutation
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLine>,
    total_items: u64,
    total_price: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If the product already has a line: its quantity grows by `quantity`
    /// - Otherwise: a new line is appended
    ///
    /// `quantity` must be >= 1; callers clamp before reaching this method.
    pub fn add_line(&mut self, product: &Product, quantity: u32) {
        debug_assert!(quantity >= 1, "add_line requires a positive quantity");

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }

        self.recompute_totals();
    }

    /// Removes the line for `product_id`.
    ///
    /// Removing a product that is not in the cart is a no-op, not an error.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
        self.recompute_totals();
    }

    /// Sets the quantity of a line to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity` 0: behaves exactly like [`Cart::remove_line`]
    /// - Product not in cart: silent no-op. This is an intentionally loose
    ///   contract inherited from the storefront design - it is NOT an
    ///   implicit add and NOT an error.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_line(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }

        self.recompute_totals();
    }

    /// Clears all lines unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute_totals();
    }

    /// Repairs a cart that was rehydrated from durable storage.
    ///
    /// A tampered or stale slot file may contain zero-quantity lines or
    /// duplicate product ids; both break invariants every other method
    /// relies on. Keeps the first line per product id, drops quantity-0
    /// lines, and recomputes totals.
    pub fn sanitize(&mut self) {
        let mut seen: Vec<ProductId> = Vec::with_capacity(self.lines.len());
        self.lines.retain(|l| {
            if l.quantity == 0 || seen.contains(&l.product_id) {
                return false;
            }
            seen.push(l.product_id);
            true
        });
        self.recompute_totals();
    }

    /// Recomputes the cached totals from the line fold.
    ///
    /// This runs after every mutation; the cached values are never trusted
    /// across a mutation boundary.
    fn recompute_totals(&mut self) {
        debug_assert!(
            self.lines.iter().all(|l| l.quantity >= 1),
            "no cart line may have quantity 0"
        );

        self.total_items = self.lines.iter().map(|l| u64::from(l.quantity)).sum();
        self.total_price = self.lines.iter().map(CartLine::line_total).sum();
    }

    /// Returns the lines in insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns the total quantity across all lines.
    #[inline]
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Returns the total price across all lines.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Returns the number of distinct lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for consumers that only render the badge/footer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: u64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: ProductId, price_cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            description: format!("Description {}", id),
            category: "electronics".to_string(),
            image: format!("https://example.com/p/{}.jpg", id),
            rating: None,
        }
    }

    /// Cross-checks the cached totals against the fold definitions.
    fn assert_totals_consistent(cart: &Cart) {
        let items: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
        let price: Money = cart.lines().iter().map(CartLine::line_total).sum();
        assert_eq!(cart.total_items(), items);
        assert_eq!(cart.total_price(), price);
    }

    #[test]
    fn test_add_line() {
        let mut cart = Cart::new();
        let product = test_product(5, 1000);

        cart.add_line(&product, 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::from_cents(2000));
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_add_same_product_aggregates() {
        let mut cart = Cart::new();
        let product = test_product(5, 1000);

        cart.add_line(&product, 2);
        cart.add_line(&product, 1);

        // Still one line, quantity 3 - not two duplicate lines
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Money::from_cents(3000));
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(5, 1000), 3);

        cart.remove_line(5);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 500), 1);

        cart.remove_line(99);

        assert_eq!(cart.line_count(), 1);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_set_quantity_absolute() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 500), 2);

        // Absolute set, not increment
        cart.set_quantity(1, 7);

        assert_eq!(cart.lines()[0].quantity, 7);
        assert_eq!(cart.total_items(), 7);
        assert_eq!(cart.total_price(), Money::from_cents(3500));
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut removed = Cart::new();
        removed.add_line(&test_product(1, 500), 2);
        removed.add_line(&test_product(2, 300), 1);
        removed.remove_line(1);

        let mut zeroed = Cart::new();
        zeroed.add_line(&test_product(1, 500), 2);
        zeroed.add_line(&test_product(2, 300), 1);
        zeroed.set_quantity(1, 0);

        assert_eq!(removed.lines(), zeroed.lines());
        assert_eq!(removed.total_items(), zeroed.total_items());
        assert_eq!(removed.total_price(), zeroed.total_price());
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 500), 2);

        cart.set_quantity(99, 4);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 500), 2);
        cart.add_line(&test_product(2, 300), 1);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(3, 100), 1);
        cart.add_line(&test_product(1, 100), 1);
        cart.add_line(&test_product(2, 100), 1);
        // Aggregating must not move the line
        cart.add_line(&test_product(1, 100), 1);

        let ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_add_add_remove_sequence() {
        // addItem(id 5 @ 10.00, qty 2) -> 2 items, 20.00
        // addItem(same, qty 1)         -> 3 items, 30.00
        // removeItem(5)                -> empty
        let mut cart = Cart::new();
        let product = test_product(5, 1000);

        cart.add_line(&product, 2);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), Money::from_cents(2000));

        cart.add_line(&product, 1);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Money::from_cents(3000));

        cart.remove_line(5);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_sanitize_repairs_tampered_state() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 500), 2);
        cart.add_line(&test_product(2, 300), 1);

        // Simulate a hand-edited slot file: zero quantity and a duplicate id
        let mut tampered: Cart = serde_json::from_str(
            &serde_json::to_string(&cart).unwrap(),
        )
        .unwrap();
        tampered.lines[0].quantity = 0;
        tampered.lines.push(tampered.lines[1].clone());
        tampered.total_items = 999;

        tampered.sanitize();

        assert_eq!(tampered.line_count(), 1);
        assert_eq!(tampered.lines()[0].product_id, 2);
        assert_eq!(tampered.total_items(), 1);
        assert_eq!(tampered.total_price(), Money::from_cents(300));
    }

    #[test]
    fn test_totals_hold_over_random_walk() {
        let mut cart = Cart::new();
        let products: Vec<Product> = (1..=4).map(|id| test_product(id, id as i64 * 125)).collect();

        for (step, product) in products.iter().cycle().take(24).enumerate() {
            match step % 4 {
                0 => cart.add_line(product, 1 + (step as u32 % 3)),
                1 => cart.set_quantity(product.id, step as u32 % 5),
                2 => cart.remove_line(product.id),
                _ => cart.add_line(product, 2),
            }
            assert_totals_consistent(&cart);
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        }
    }

    #[test]
    fn test_cart_totals_summary() {
        let mut cart = Cart::new();
        cart.add_line(&test_product(1, 500), 2);
        cart.add_line(&test_product(2, 300), 1);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_items, 3);
        assert_eq!(totals.total_price, Money::from_cents(1300));
    }
}
