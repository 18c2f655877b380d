//! # Fallback Dataset
//!
//! The fixed, bundled products served when the remote catalog source is
//! unavailable. The storefront stays browsable with this dataset alone;
//! callers cannot tell the difference except through the [`crate::Source`]
//! tag and the log.

use shopfront_core::{Money, Product, ProductId, Rating};

/// Category labels returned when the remote category list is unavailable.
///
/// Deliberately a short, safe subset rather than everything the bundled
/// dataset covers: the filter UI built from these labels must never offer a
/// category the remote source wouldn't also have.
pub const FALLBACK_CATEGORIES: &[&str] = &["electronics", "fashion"];

/// Returns the bundled product dataset.
pub fn products() -> Vec<Product> {
    fn entry(
        id: ProductId,
        title: &str,
        price_cents: i64,
        description: &str,
        category: &str,
        slug: &str,
        rating: Option<(f64, u64)>,
    ) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: Money::from_cents(price_cents),
            description: description.to_string(),
            category: category.to_string(),
            image: format!("https://cdn.shopfront.example/img/{slug}.jpg"),
            rating: rating.map(|(rate, count)| Rating { rate, count }),
        }
    }

    vec![
        entry(
            1,
            "Wireless Over-Ear Headphones",
            8999,
            "Closed-back wireless headphones with 40h battery life and USB-C fast charging.",
            "electronics",
            "headphones",
            Some((4.3, 412)),
        ),
        entry(
            2,
            "USB-C Charging Hub, 7 Ports",
            3450,
            "Seven-port hub with pass-through charging for laptops, tablets and phones.",
            "electronics",
            "usb-hub",
            Some((4.0, 88)),
        ),
        entry(
            3,
            "1TB Portable SSD",
            12999,
            "Pocket-sized solid state drive, 1050 MB/s reads, drop resistant to 2m.",
            "electronics",
            "portable-ssd",
            Some((4.8, 1024)),
        ),
        entry(
            4,
            "Slim Fit Cotton T-Shirt",
            2295,
            "Pre-shrunk combed cotton tee with a tailored cut. Machine washable.",
            "fashion",
            "tshirt",
            Some((3.9, 430)),
        ),
        entry(
            5,
            "Waterproof Rain Jacket",
            6490,
            "Three-layer shell jacket with taped seams and an adjustable hood.",
            "fashion",
            "rain-jacket",
            Some((4.1, 259)),
        ),
        entry(
            6,
            "Sterling Silver Pendant Necklace",
            16950,
            "925 sterling silver chain with a hand-polished teardrop pendant.",
            "jewelery",
            "pendant",
            Some((4.6, 70)),
        ),
        entry(
            7,
            "Cast Iron Skillet 26cm",
            4199,
            "Pre-seasoned cast iron skillet, oven safe, works on induction hobs.",
            "home",
            "skillet",
            None,
        ),
        entry(
            8,
            "Linen Throw Pillow Cover",
            1575,
            "Stonewashed linen cover with a hidden zipper, fits 45x45cm inserts.",
            "home",
            "pillow-cover",
            Some((3.2, 15)),
        ),
    ]
}

/// Local lookup by id within the bundled dataset.
pub fn product_by_id(id: ProductId) -> Option<Product> {
    products().into_iter().find(|p| p.id == id)
}

/// Bundled dataset filtered by exact category label.
pub fn products_by_category(category: &str) -> Vec<Product> {
    products()
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

/// The fixed short category list.
pub fn categories() -> Vec<String> {
    FALLBACK_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_ids_are_unique() {
        let all = products();
        let mut ids: Vec<_> = all.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(product_by_id(3).unwrap().title, "1TB Portable SSD");
        assert!(product_by_id(999).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let electronics = products_by_category("electronics");
        assert_eq!(electronics.len(), 3);
        assert!(products_by_category("nonexistent").is_empty());
    }

    #[test]
    fn test_fixed_category_list() {
        assert_eq!(categories(), vec!["electronics", "fashion"]);
    }
}
