//! # Catalog Error Types
//!
//! Construction-time errors only. Fetch failures never surface as errors -
//! they resolve to the bundled fallback dataset inside the client.

use thiserror::Error;

/// Errors building a [`crate::CatalogClient`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured base URL does not parse.
    #[error("invalid catalog base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
