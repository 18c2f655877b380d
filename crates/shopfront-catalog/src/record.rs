//! Wire records for the remote product source.
//!
//! The remote API speaks FakeStore-shaped JSON with decimal prices; domain
//! `Product`s carry integer minor units. The conversion happens here, once,
//! at the boundary. A record missing any required field fails
//! deserialization, which the client treats as a malformed payload.

use serde::Deserialize;

use shopfront_core::{Money, Product, Rating};

/// One product as the remote source serializes it.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: u64,
    pub title: String,
    /// Decimal price, e.g. `109.95`.
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub rating: Option<RatingRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RatingRecord {
    pub rate: f64,
    pub count: u64,
}

impl ProductRecord {
    pub(crate) fn into_product(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: money_from_decimal(self.price),
            description: self.description,
            category: self.category,
            image: self.image,
            rating: self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
        }
    }
}

/// Converts a decimal price to minor units, rounding half away from zero.
fn money_from_decimal(price: f64) -> Money {
    Money::from_cents((price * 100.0).round() as i64)
}
