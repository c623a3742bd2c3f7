use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::validate;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryForm {
    pub category_name: String,
}

impl CategoryForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Category name", &self.category_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubCategoryForm {
    pub sub_category_name: String,
    pub sub_category_icon: String,
}

impl SubCategoryForm {
    pub fn validate(&self) -> AppResult<()> {
        validate::require("Sub-category name", &self.sub_category_name)?;
        if !validate::is_valid_image_url(&self.sub_category_icon) {
            return Err(AppError::Validation(
                "Sub-category icon must be a valid http(s) URL".into(),
            ));
        }
        Ok(())
    }
}
