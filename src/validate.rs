//! Synchronous field-presence and format checks run before any network call.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, AppResult};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static PINCODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());
static IMAGE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+\.[^\s]+$").unwrap());

pub fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    PINCODE_RE.is_match(pincode)
}

/// Images must be absolute http(s) URLs; relative paths are rejected.
pub fn is_valid_image_url(url: &str) -> bool {
    IMAGE_URL_RE.is_match(url)
}

pub fn validate_email(email: &str) -> AppResult<()> {
    require("Email", email)?;
    if !is_valid_email(email) {
        return Err(AppError::Validation("Email format is invalid".into()));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> AppResult<()> {
    require("Phone", phone)?;
    if !is_valid_phone(phone) {
        return Err(AppError::Validation(
            "Phone must be a 10 digit number".into(),
        ));
    }
    Ok(())
}
