//! # Catalog Client
//!
//! Hand-crafted async HTTP client for the remote product source.
//!
//! ## Fetch-or-Fallback
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Attempt, Then Fallback                          │
//! │                                                                         │
//! │  all_products()                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET <base>            (client-level 10s timeout)                       │
//! │       │                                                                 │
//! │   ┌───┴──────────────┬─────────────────┬──────────────────┐            │
//! │   ▼                  ▼                 ▼                  ▼            │
//! │  2xx + wellformed   non-2xx        network/timeout    malformed        │
//! │   │                  │                 │                  │            │
//! │   ▼                  └────────────┬────┴──────────────────┘            │
//! │  Source::Remote                   ▼                                     │
//! │                            warn! + bundled dataset                      │
//! │                            Source::Fallback                             │
//! │                                                                         │
//! │  No retries, no backoff: the failure path IS the fallback.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use shopfront_core::{Product, ProductId};

use crate::error::CatalogError;
use crate::fallback;
use crate::record::ProductRecord;

/// Default remote product source (FakeStore-shaped JSON).
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com/products";

/// Bound on every remote attempt. Hitting it means fallback, not retry.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Fetched
// =============================================================================

/// Where a [`Fetched`] value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The remote catalog source answered with well-formed data.
    Remote,
    /// The bundled dataset stood in for a failed fetch.
    Fallback,
}

/// A catalog answer with its provenance.
///
/// There is no error variant on purpose: the provider's visible contract is
/// "valid data is always returned". `source` is informational.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    fn remote(data: T) -> Self {
        Fetched {
            data,
            source: Source::Remote,
        }
    }

    fn fallback(data: T) -> Self {
        Fetched {
            data,
            source: Source::Fallback,
        }
    }

    /// True when the bundled dataset stood in for the remote source.
    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }
}

// =============================================================================
// Client
// =============================================================================

/// Async client for the remote product source.
pub struct CatalogClient {
    http: reqwest::Client,
    /// Base with a trailing slash, for joining sub-paths.
    base: Url,
    /// Base without a trailing slash - the collection endpoint itself.
    collection: Url,
}

impl CatalogClient {
    /// Builds a client against [`DEFAULT_BASE_URL`] with the standard
    /// [`FETCH_TIMEOUT`].
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Builds a client against a custom product source.
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Self::with_client(http, base_url)
    }

    /// Wraps an existing `reqwest::Client` (caller manages timeouts).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, CatalogError> {
        let trimmed = base_url.trim_end_matches('/');
        let collection = Url::parse(trimmed)?;
        let base = Url::parse(&format!("{trimmed}/"))?;
        Ok(CatalogClient {
            http,
            base,
            collection,
        })
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Every product the source knows about.
    ///
    /// Fallback: the bundled dataset.
    pub async fn all_products(&self) -> Fetched<Vec<Product>> {
        match self.get_json::<Vec<ProductRecord>>(self.collection.clone()).await {
            Ok(records) => {
                Fetched::remote(records.into_iter().map(ProductRecord::into_product).collect())
            }
            Err(err) => {
                warn!(error = %err, "product fetch failed, serving bundled dataset");
                Fetched::fallback(fallback::products())
            }
        }
    }

    /// A single product, `None` when the id is unknown.
    ///
    /// Fallback: a local lookup by id within the bundled dataset.
    pub async fn product_by_id(&self, id: ProductId) -> Fetched<Option<Product>> {
        // The source answers `null` for unknown ids - that is a remote
        // not-found, not a malformed payload.
        match self
            .get_json::<Option<ProductRecord>>(self.endpoint(&id.to_string()))
            .await
        {
            Ok(record) => Fetched::remote(record.map(ProductRecord::into_product)),
            Err(err) => {
                warn!(id, error = %err, "product fetch failed, searching bundled dataset");
                Fetched::fallback(fallback::product_by_id(id))
            }
        }
    }

    /// Products in one category (exact label).
    ///
    /// Fallback: the bundled dataset filtered by the same label.
    pub async fn products_by_category(&self, category: &str) -> Fetched<Vec<Product>> {
        match self
            .get_json::<Vec<ProductRecord>>(self.endpoint(&format!("category/{category}")))
            .await
        {
            Ok(records) => {
                Fetched::remote(records.into_iter().map(ProductRecord::into_product).collect())
            }
            Err(err) => {
                warn!(category, error = %err, "category fetch failed, serving bundled dataset");
                Fetched::fallback(fallback::products_by_category(category))
            }
        }
    }

    /// Distinct category labels.
    ///
    /// Fallback: the fixed short list in [`fallback::FALLBACK_CATEGORIES`].
    pub async fn categories(&self) -> Fetched<Vec<String>> {
        match self.get_json::<Vec<String>>(self.endpoint("categories")).await {
            Ok(categories) => Fetched::remote(categories),
            Err(err) => {
                warn!(error = %err, "category list fetch failed, serving fixed list");
                Fetched::fallback(fallback::categories())
            }
        }
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Joins a sub-path onto the base URL.
    fn endpoint(&self, path: &str) -> Url {
        // base always ends with `/`, so joining `<id>` or `category/x` works
        self.base
            .join(path)
            .expect("path should be a valid relative URL")
    }

    /// Single GET attempt: 2xx and a well-formed body, or an error.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, reqwest::Error> {
        debug!("GET {url}");
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
