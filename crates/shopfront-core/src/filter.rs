//! # Filter/Sort Engine
//!
//! Pure mapping from (product list, criteria) to a filtered, sorted product
//! list. The same input always yields the same output sequence.
//!
//! ## Order of Operations
//! The steps run in a fixed order so the output is deterministic:
//!
//! 1. category (exact match, skipped when unset or `"all"`)
//! 2. price range (inclusive on both ends)
//! 3. minimum rating (only when set and above 0; no rating counts as 0)
//! 4. text search (case-insensitive substring over title OR description OR
//!    category)
//! 5. stable sort by the sort key; no key leaves provider order untouched
//!
//! Pagination is a separate pure slice applied downstream of the engine.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// Products shown per page by the listing view.
pub const PAGE_SIZE: usize = 12;

// =============================================================================
// Criteria
// =============================================================================

/// Inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Sort order applied as the last filtering step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Title A-Z (case-insensitive).
    TitleAsc,
    /// Title Z-A (case-insensitive).
    TitleDesc,
}

/// The user-chosen filter/sort parameters.
///
/// Criteria are stateless: recomputed from user input on every change and
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterCriteria {
    /// Category label; `None` or `"all"` keeps every category.
    pub category: Option<String>,

    /// Inclusive price window.
    pub price_range: Option<PriceRange>,

    /// Minimum rating; values <= 0 keep everything.
    pub min_rating: Option<f64>,

    /// Sort order; `None` keeps provider order.
    pub sort_key: Option<SortKey>,

    /// Free-text query; empty strings keep everything.
    pub search_text: Option<String>,
}

// =============================================================================
// Engine
// =============================================================================

/// Filters and sorts `products` according to `criteria`.
///
/// Pure function: no state, no I/O, deterministic output. The sort is
/// stable, so products with equal keys retain their relative input order.
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches_category(p, criteria))
        .filter(|p| matches_price(p, criteria))
        .filter(|p| matches_rating(p, criteria))
        .filter(|p| matches_search(p, criteria))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort_key {
        // Vec::sort_by is stable, which the engine's contract requires
        filtered.sort_by(|a, b| compare(a, b, key));
    }

    filtered
}

/// Returns the 1-based `page` slice of an already filtered/sorted list.
///
/// Pages past the end are empty, not an error.
pub fn paginate(products: &[Product], page: usize) -> &[Product] {
    let page = page.max(1);
    let start = (page - 1) * PAGE_SIZE;
    if start >= products.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(products.len());
    &products[start..end]
}

fn matches_category(product: &Product, criteria: &FilterCriteria) -> bool {
    match criteria.category.as_deref() {
        None | Some("all") => true,
        // Exact, case-sensitive as stored
        Some(category) => product.category == category,
    }
}

fn matches_price(product: &Product, criteria: &FilterCriteria) -> bool {
    match criteria.price_range {
        None => true,
        Some(range) => range.contains(product.price),
    }
}

fn matches_rating(product: &Product, criteria: &FilterCriteria) -> bool {
    match criteria.min_rating {
        Some(min) if min > 0.0 => product.rating_rate() >= min,
        _ => true,
    }
}

fn matches_search(product: &Product, criteria: &FilterCriteria) -> bool {
    let query = match criteria.search_text.as_deref() {
        None | Some("") => return true,
        Some(text) => text.to_lowercase(),
    };

    product.title.to_lowercase().contains(&query)
        || product.description.to_lowercase().contains(&query)
        || product.category.to_lowercase().contains(&query)
}

fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
        SortKey::TitleAsc => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::TitleDesc => b.title.to_lowercase().cmp(&a.title.to_lowercase()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
