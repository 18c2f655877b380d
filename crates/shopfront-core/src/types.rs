//! # Domain Types
//!
//! Core domain types used throughout Shopfront.
//!
//! ## Ownership Rules
//! Products are owned by the catalog provider and are immutable once fetched.
//! The cart and wishlist never mutate a `Product` - they copy the fields they
//! need (snapshot pattern), so a later catalog refresh cannot change what the
//! customer already put in the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Stable integer identifier assigned by the catalog source.
pub type ProductId = u64;

// =============================================================================
// Rating
// =============================================================================

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average rating, 0.0 to 5.0.
    pub rate: f64,

    /// Number of ratings the average is based on.
    pub count: u64,
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (integer, stable across fetches).
    pub id: ProductId,

    /// Display title shown in listings and on the product page.
    pub title: String,

    /// Price in minor units.
    pub price: Money,

    /// Long-form description, searched by the filter engine.
    pub description: String,

    /// Free-text category label (exact, case-sensitive as stored).
    pub category: String,

    /// Image URI.
    pub image: String,

    /// Aggregate rating; absent for products nobody rated yet.
    pub rating: Option<Rating>,
}

impl Product {
    /// Returns the rating rate, treating a missing rating as 0.
    ///
    /// The filter engine uses this so unrated products are excluded by any
    /// minimum-rating criterion above zero.
    #[inline]
    pub fn rating_rate(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }

    /// Returns the title truncated for card display.
    ///
    /// Titles longer than `max` characters are cut and suffixed with an
    /// ellipsis.
    pub fn short_title(&self, max: usize) -> String {
        if self.title.chars().count() > max {
            let cut: String = self.title.chars().take(max).collect();
            format!("{}...", cut)
        } else {
            self.title.clone()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, rating: Option<Rating>) -> Product {
        Product {
            id: 1,
            title: title.to_string(),
            price: Money::from_cents(999),
            description: String::new(),
            category: "electronics".to_string(),
            image: "https://example.com/p/1.jpg".to_string(),
            rating,
        }
    }

    #[test]
    fn test_rating_rate_defaults_to_zero() {
        assert_eq!(product("a", None).rating_rate(), 0.0);

        let rated = product("a", Some(Rating { rate: 4.2, count: 10 }));
        assert_eq!(rated.rating_rate(), 4.2);
    }

    #[test]
    fn test_short_title() {
        let p = product("USB-C Charging Cable 2m Braided Nylon", None);
        assert_eq!(p.short_title(10), "USB-C Char...");
        assert_eq!(p.short_title(50), "USB-C Charging Cable 2m Braided Nylon");
    }
}
