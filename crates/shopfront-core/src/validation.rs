//! # Validation Module
//!
//! Checkout form validation.
//!
//! The storefront never processes a real payment, but the checkout form is
//! still validated field by field so the presentation layer gets immediate,
//! specific feedback. Validators are small pure functions; the form-level
//! [`CheckoutForm::validate`] runs them in declaration order and reports the
//! first failure.
//!
//! Shape checks (digit counts, the `MM/YY` expiry, the `#####-###` zip) are
//! hand-rolled character scans - a regex engine would be a heavyweight
//! dependency for four fixed patterns.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Checkout Form
// =============================================================================

/// Everything the customer types into the checkout page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub card_cvv: String,
}

impl CheckoutForm {
    /// Validates every field, returning the first violation.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_min_chars("first name", &self.first_name, 2)?;
        validate_min_chars("last name", &self.last_name, 2)?;
        validate_email(&self.email)?;
        validate_min_chars("phone", &self.phone, 10)?;
        validate_min_chars("street", &self.street, 5)?;
        validate_min_chars("number", &self.number, 1)?;
        validate_min_chars("city", &self.city, 2)?;
        validate_min_chars("state", &self.state, 2)?;
        validate_zip_code(&self.zip_code)?;
        validate_card_number(&self.card_number)?;
        validate_min_chars("card name", &self.card_name, 3)?;
        validate_card_expiry(&self.card_expiry)?;
        validate_card_cvv(&self.card_cvv)?;
        Ok(())
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates that a field has at least `min` characters after trimming.
pub fn validate_min_chars(field: &'static str, value: &str, min: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    if value.chars().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// A single `@` with a non-empty local part and a domain containing a dot.
/// Deliberately loose - the authoritative check is the confirmation email
/// nobody sends in a mocked checkout.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email",
        reason: "expected name@domain.tld",
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates a zip code in the `#####-###` shape (hyphen optional).
pub fn validate_zip_code(zip: &str) -> ValidationResult<()> {
    let zip = zip.trim();

    if zip.is_empty() {
        return Err(ValidationError::Required { field: "zip code" });
    }

    let digits: Vec<char> = zip.chars().filter(char::is_ascii_digit).collect();
    let well_shaped = match zip.len() {
        8 => digits.len() == 8,
        9 => digits.len() == 8 && zip.as_bytes()[5] == b'-',
        _ => false,
    };

    if !well_shaped {
        return Err(ValidationError::InvalidFormat {
            field: "zip code",
            reason: "expected 00000-000",
        });
    }

    Ok(())
}

/// Validates a card number: exactly 16 digits.
pub fn validate_card_number(number: &str) -> ValidationResult<()> {
    let number = number.trim();

    if number.is_empty() {
        return Err(ValidationError::Required { field: "card number" });
    }

    if number.len() != 16 || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card number",
            reason: "must be exactly 16 digits",
        });
    }

    Ok(())
}

/// Validates a card expiry in the `MM/YY` shape.
pub fn validate_card_expiry(expiry: &str) -> ValidationResult<()> {
    let expiry = expiry.trim();

    if expiry.is_empty() {
        return Err(ValidationError::Required { field: "card expiry" });
    }

    let bytes = expiry.as_bytes();
    let well_shaped = expiry.len() == 5
        && bytes[2] == b'/'
        && expiry.chars().enumerate().all(|(i, c)| i == 2 || c.is_ascii_digit());

    if !well_shaped {
        return Err(ValidationError::InvalidFormat {
            field: "card expiry",
            reason: "expected MM/YY",
        });
    }

    Ok(())
}

/// Validates a card CVV: 3 or 4 digits.
pub fn validate_card_cvv(cvv: &str) -> ValidationResult<()> {
    let cvv = cvv.trim();

    if cvv.is_empty() {
        return Err(ValidationError::Required { field: "card cvv" });
    }

    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "card cvv",
            reason: "must be 3 or 4 digits",
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
