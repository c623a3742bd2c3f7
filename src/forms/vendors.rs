use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::validate;

#[derive(Debug, Clone, Deserialize)]
pub struct VendorForm {
    pub name: String,
    pub email: String,
    /// Initial password; the vendor is forced to change it on first login.
    pub password: String,
}

impl VendorForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Name", &self.name)?;
        validate::validate_email(&self.email)?;
        validate::require("Password", &self.password)?;
        if self.password.len() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVendorForm {
    pub name: String,
    pub email: String,
}

impl UpdateVendorForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Name", &self.name)?;
        validate::validate_email(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_form_checks_email_format() {
        let form = VendorForm {
            name: "Acme Jewels".into(),
            email: "not-an-email".into(),
            password: "s3cret-pass".into(),
        };
        assert!(form.validate().is_err());
    }
}
