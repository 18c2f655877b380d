//! # Error Types
//!
//! Validation error types for shopfront-core.
//!
//! The storefront core is deliberately hard to break: cart and wishlist
//! mutations on an invalid target are documented no-ops, and the catalog
//! provider resolves its own failures by falling back. The only operations
//! that can reject input are the checkout form validators, so this module
//! carries a single error enum.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when checkout form input doesn't meet requirements.
/// Each variant maps to a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Invalid format (e.g., malformed email, wrong digit count).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;
