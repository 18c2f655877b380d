//! # shopfront-catalog: Product Catalog Provider
//!
//! Fetches the product catalog from a remote JSON source and falls back to a
//! bundled dataset on any failure - network error, timeout, non-2xx status,
//! or a payload that doesn't match the expected record shape.
//!
//! Fallback resolution happens *inside* this crate. Callers receive
//! [`Fetched`] values and never need to distinguish "real data" from
//! "fallback data" through error handling; the [`Source`] tag exists for
//! logging and for UIs that want to show a "catalog may be stale" hint.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shopfront_catalog::CatalogClient;
//!
//! # async fn demo() -> Result<(), shopfront_catalog::CatalogError> {
//! let catalog = CatalogClient::new()?;
//! let products = catalog.all_products().await;
//! for product in &products.data {
//!     println!("{}: {}", product.title, product.price);
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod fallback;

mod record;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{CatalogClient, Fetched, Source, DEFAULT_BASE_URL, FETCH_TIMEOUT};
pub use error::CatalogError;
