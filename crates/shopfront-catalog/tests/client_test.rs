// Integration tests for `CatalogClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopfront_catalog::{CatalogClient, Source};
use shopfront_core::Money;

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CatalogClient) {
    let server = MockServer::start().await;
    let base_url = format!("{}/products", server.uri());
    let client = CatalogClient::with_client(reqwest::Client::new(), &base_url).unwrap();
    (server, client)
}

/// A client pointed at a port nothing listens on - every fetch fails fast.
fn unreachable_client() -> CatalogClient {
    CatalogClient::with_client(reqwest::Client::new(), "http://127.0.0.1:9/products").unwrap()
}

fn backpack_record() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Backpack",
        "price": 109.95,
        "description": "Fits 15 inch laptops",
        "category": "men's clothing",
        "image": "https://example.com/1.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    })
}

// ── all_products ────────────────────────────────────────────────────

#[tokio::test]
async fn test_all_products_remote_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([backpack_record()])))
        .mount(&server)
        .await;

    let fetched = client.all_products().await;

    assert_eq!(fetched.source, Source::Remote);
    assert_eq!(fetched.data.len(), 1);
    assert_eq!(fetched.data[0].title, "Backpack");
    // Decimal price mapped to minor units at the boundary
    assert_eq!(fetched.data[0].price, Money::from_cents(10995));
}

#[tokio::test]
async fn test_all_products_server_error_falls_back() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let fetched = client.all_products().await;

    // Not an error and not an empty list: the bundled dataset
    assert_eq!(fetched.source, Source::Fallback);
    assert!(!fetched.data.is_empty());
}

#[tokio::test]
async fn test_all_products_malformed_body_falls_back() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "an array" })))
        .mount(&server)
        .await;

    let fetched = client.all_products().await;
    assert!(fetched.is_fallback());
    assert!(!fetched.data.is_empty());
}

#[tokio::test]
async fn test_all_products_unreachable_host_falls_back() {
    let fetched = unreachable_client().all_products().await;
    assert!(fetched.is_fallback());
    assert!(!fetched.data.is_empty());
}

// ── product_by_id ───────────────────────────────────────────────────

#[tokio::test]
async fn test_product_by_id_remote_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(backpack_record()))
        .mount(&server)
        .await;

    let fetched = client.product_by_id(1).await;

    assert_eq!(fetched.source, Source::Remote);
    assert_eq!(fetched.data.unwrap().id, 1);
}

#[tokio::test]
async fn test_product_by_id_remote_null_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let fetched = client.product_by_id(42).await;

    // A remote answer, just an empty one
    assert_eq!(fetched.source, Source::Remote);
    assert!(fetched.data.is_none());
}

#[tokio::test]
async fn test_product_by_id_falls_back_to_local_lookup() {
    let client = unreachable_client();

    // Id 1 exists in the bundled dataset
    let found = client.product_by_id(1).await;
    assert!(found.is_fallback());
    assert!(found.data.is_some());

    let missing = client.product_by_id(99_999).await;
    assert!(missing.is_fallback());
    assert!(missing.data.is_none());
}

// ── products_by_category ────────────────────────────────────────────

#[tokio::test]
async fn test_products_by_category_remote_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/category/electronics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([backpack_record()])))
        .mount(&server)
        .await;

    let fetched = client.products_by_category("electronics").await;

    assert_eq!(fetched.source, Source::Remote);
    assert_eq!(fetched.data.len(), 1);
}

#[tokio::test]
async fn test_products_by_category_fallback_filters_dataset() {
    let fetched = unreachable_client().products_by_category("electronics").await;

    assert!(fetched.is_fallback());
    assert!(!fetched.data.is_empty());
    assert!(fetched.data.iter().all(|p| p.category == "electronics"));
}

// ── categories ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_categories_remote_success() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["electronics", "jewelery", "men's clothing"])),
        )
        .mount(&server)
        .await;

    let fetched = client.categories().await;

    assert_eq!(fetched.source, Source::Remote);
    assert_eq!(fetched.data.len(), 3);
}

#[tokio::test]
async fn test_categories_fallback_is_fixed_short_list() {
    let fetched = unreachable_client().categories().await;

    assert!(fetched.is_fallback());
    assert_eq!(fetched.data, vec!["electronics", "fashion"]);
}
