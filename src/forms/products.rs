use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::validate;

/// Create/edit form for a product. The denormalized category, sub-category
/// and vendor snapshots are attached by the service from the referenced
/// records, not by the form.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub product_name: String,
    pub price: Decimal,
    pub discount: Decimal,
    pub stock: i32,
    pub category_id: Uuid,
    pub sub_category_id: Uuid,
    /// Admins-row id of the selected vendor account.
    pub vendor_id: Uuid,
    pub images: Vec<String>,
}

impl ProductForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Product name", &self.product_name)?;
        if self.price <= Decimal::ZERO {
            return Err(AppError::Validation("Price must be greater than 0".into()));
        }
        if self.discount < Decimal::ZERO || self.discount > Decimal::ONE_HUNDRED {
            return Err(AppError::Validation(
                "Discount must be between 0 and 100".into(),
            ));
        }
        if self.stock < 0 {
            return Err(AppError::Validation("Stock cannot be negative".into()));
        }
        if self.images.is_empty() {
            return Err(AppError::Validation(
                "At least one image URL is required".into(),
            ));
        }
        for url in &self.images {
            if !validate::is_valid_image_url(url) {
                return Err(AppError::Validation(format!(
                    "Image URL is not a valid http(s) URL: {url}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn form() -> ProductForm {
        ProductForm {
            product_name: "Gold Ring".into(),
            price: Decimal::from(1000),
            discount: Decimal::from(10),
            stock: 5,
            category_id: Uuid::new_v4(),
            sub_category_id: Uuid::new_v4(),
            vendor_id: Uuid::new_v4(),
            images: vec!["https://cdn.example.com/ring.png".into()],
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn price_must_be_positive() {
        let mut f = form();
        f.price = Decimal::ZERO;
        assert!(f.validate().is_err());
        f.price = Decimal::from_str("-1").unwrap();
        assert!(f.validate().is_err());
    }

    #[test]
    fn discount_bounds() {
        let mut f = form();
        f.discount = Decimal::from(100);
        assert!(f.validate().is_ok());
        f.discount = Decimal::from(101);
        assert!(f.validate().is_err());
        f.discount = Decimal::from_str("-0.5").unwrap();
        assert!(f.validate().is_err());
    }

    #[test]
    fn at_least_one_valid_image_url() {
        let mut f = form();
        f.images.clear();
        assert!(f.validate().is_err());

        f.images = vec!["/relative/path.png".into()];
        assert!(f.validate().is_err());
    }
}
