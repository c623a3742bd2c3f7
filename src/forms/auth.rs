use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::validate;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Name", &self.name)?;
        validate::validate_email(&self.email)?;
        validate::validate_phone(&self.phone)?;
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
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::validate_email(&self.email)?;
        validate::require("Password", &self.password)
    }
}

/// The one-time forced password change shown when `reset_password` is set.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Password", &self.password)?;
        if self.password.len() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".into(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match".into()));
        }
        Ok(())
    }
}
