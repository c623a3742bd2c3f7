//! Storefront product browsing. Only active products are listed; inactive
//! ones stay reachable by id so stale links degrade to a detail page
//! instead of an error.

use uuid::Uuid;

use crate::{
    backend::{Backend, ListQuery},
    error::AppResult,
    models::Product,
};

pub async fn list_products(
    backend: &Backend,
    category_id: Option<Uuid>,
    sub_category_id: Option<Uuid>,
) -> AppResult<Vec<Product>> {
    let mut query = ListQuery::new().eq("status", true);
    if let Some(sub_category_id) = sub_category_id {
        query = query.eq("sub_category_id", sub_category_id);
    }
    if let Some(category_id) = category_id {
        query = query.eq("category_id", category_id);
    }
    backend.fetch_all("products", &query).await
}

pub async fn get_product(backend: &Backend, id: Uuid) -> AppResult<Product> {
    backend.fetch_one("products", id).await
}
