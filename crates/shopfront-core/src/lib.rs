//! # shopfront-core: Pure Business Logic for Shopfront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (out of scope)                     │   │
//! │  │    Product pages ──► Cart UI ──► Wishlist UI ──► Checkout UI   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shopfront-store (state containers)                 │   │
//! │  │    add_item, update_quantity, toggle_theme, place_order        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopfront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  filter   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ criteria  │  │   │
//! │  │   │  Rating   │  │           │  │ CartLine  │  │  sorting  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rating)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart with per-product line aggregation and cached totals
//! - [`wishlist`] - Wishlist with set semantics
//! - [`filter`] - Pure product filtering, sorting, and pagination
//! - [`validation`] - Checkout form validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64) to avoid
//!    float errors
//! 4. **Total Operations**: Cart and wishlist mutations never fail - invalid
//!    targets are documented no-ops, mirroring the storefront's contract

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod filter;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Money` instead of
// `use shopfront_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{ValidationError, ValidationResult};
pub use filter::{filter_products, paginate, FilterCriteria, PriceRange, SortKey, PAGE_SIZE};
pub use money::Money;
pub use types::{Product, ProductId, Rating};
pub use validation::CheckoutForm;
pub use wishlist::Wishlist;
