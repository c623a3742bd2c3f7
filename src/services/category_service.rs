//! Category CRUD. Sub-categories live inside their owning category
//! document, so every sub-category change is an update of that document.

use uuid::Uuid;

use crate::{
    backend::{Backend, ListQuery},
    error::{AppError, AppResult},
    forms::categories::{CategoryForm, SubCategoryForm},
    models::{Category, SubCategory},
};

pub async fn list_categories(backend: &Backend) -> AppResult<Vec<Category>> {
    backend.fetch_all("categories", &ListQuery::new()).await
}

pub async fn create_category(backend: &Backend, form: CategoryForm) -> AppResult<Category> {
    form.validate()?;
    let id = Uuid::new_v4();
    let category = Category {
        id,
        category_id: id,
        category_name: form.category_name,
        sub_categories: vec![],
    };
    backend.create("categories", &category).await
}

pub async fn rename_category(
    backend: &Backend,
    id: Uuid,
    form: CategoryForm,
) -> AppResult<Category> {
    form.validate()?;
    backend
        .patch(
            "categories",
            id,
            &serde_json::json!({ "category_name": form.category_name }),
        )
        .await
}

pub async fn delete_category(backend: &Backend, id: Uuid) -> AppResult<()> {
    backend.delete("categories", id).await
}

/// Append a sub-category to the owning category and persist the whole
/// document.
pub async fn add_sub_category(
    backend: &Backend,
    category_id: Uuid,
    form: SubCategoryForm,
) -> AppResult<Category> {
    form.validate()?;
    let mut category: Category = backend.fetch_one("categories", category_id).await?;
    let id = Uuid::new_v4();
    category.sub_categories.push(SubCategory {
        id,
        sub_category_id: id,
        sub_category_name: form.sub_category_name,
        sub_category_icon: form.sub_category_icon,
    });
    backend.replace("categories", category_id, &category).await
}

pub async fn update_sub_category(
    backend: &Backend,
    category_id: Uuid,
    sub_category_id: Uuid,
    form: SubCategoryForm,
) -> AppResult<Category> {
    form.validate()?;
    let mut category: Category = backend.fetch_one("categories", category_id).await?;
    let sub = category
        .sub_categories
        .iter_mut()
        .find(|sub| sub.id == sub_category_id)
        .ok_or(AppError::NotFound)?;
    sub.sub_category_name = form.sub_category_name;
    sub.sub_category_icon = form.sub_category_icon;
    backend.replace("categories", category_id, &category).await
}

pub async fn remove_sub_category(
    backend: &Backend,
    category_id: Uuid,
    sub_category_id: Uuid,
) -> AppResult<Category> {
    let mut category: Category = backend.fetch_one("categories", category_id).await?;
    let before = category.sub_categories.len();
    category.sub_categories.retain(|sub| sub.id != sub_category_id);
    if category.sub_categories.len() == before {
        return Err(AppError::NotFound);
    }
    backend.replace("categories", category_id, &category).await
}
