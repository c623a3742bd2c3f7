use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::validate;

#[derive(Debug, Clone, Deserialize)]
pub struct AddressForm {
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl AddressForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Address line", &self.address_line)?;
        validate::require("State", &self.state)?;
        validate::require("City", &self.city)?;
        if !validate::is_valid_pincode(&self.pincode) {
            return Err(AppError::Validation(
                "Pin Code must be a 6-digit number".into(),
            ));
        }
        Ok(())
    }
}
