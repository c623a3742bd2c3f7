//! Back-office product CRUD.
//!
//! Create and update re-resolve the selected category, sub-category and
//! vendor so the product carries fresh denormalized snapshots of all three.
//! Snapshots inside existing carts and orders are deliberately left frozen.

use uuid::Uuid;

use crate::{
    backend::{Backend, ListQuery},
    error::{AppError, AppResult},
    forms::products::ProductForm,
    models::{AdminUser, Category, Product, Role, SubCategory, VendorSummary},
    services::admin_auth,
    session::SessionStore,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub vendor_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub sub_category_id: Option<Uuid>,
}

fn apply_filter(mut query: ListQuery, filter: &ProductFilter) -> ListQuery {
    if let Some(vendor_id) = filter.vendor_id {
        query = query.eq("vendor_id", vendor_id);
    }
    if let Some(category_id) = filter.category_id {
        query = query.eq("category_id", category_id);
        if let Some(sub_category_id) = filter.sub_category_id {
            query = query.eq("sub_category_id", sub_category_id);
        }
    }
    query
}

/// Vendors only ever see their own products; admins see everything.
pub fn scope_for(user: &AdminUser, mut filter: ProductFilter) -> ProductFilter {
    if user.role == Role::Vendor {
        filter.vendor_id = user.vendor_id;
    }
    filter
}

/// Total count for the pager. The backend has no count endpoint, so this
/// fetches the unpaginated filtered listing and takes its length.
pub async fn count_products(backend: &Backend, filter: &ProductFilter) -> AppResult<usize> {
    let products: Vec<Product> = backend
        .fetch_all("products", &apply_filter(ListQuery::new(), filter))
        .await?;
    Ok(products.len())
}

pub async fn list_products(
    backend: &Backend,
    page: i64,
    limit: i64,
    filter: &ProductFilter,
) -> AppResult<Vec<Product>> {
    let query = apply_filter(ListQuery::new().page(page).limit(limit), filter);
    backend.fetch_all("products", &query).await
}

async fn resolve_snapshots(
    backend: &Backend,
    form: &ProductForm,
) -> AppResult<(Category, SubCategory, VendorSummary)> {
    let category: Category = backend.fetch_one("categories", form.category_id).await?;
    let sub_category = category
        .sub_categories
        .iter()
        .find(|sub| sub.id == form.sub_category_id)
        .cloned()
        .ok_or_else(|| AppError::Validation("Sub-category does not belong to category".into()))?;

    let vendor: AdminUser = backend.fetch_one("admins", form.vendor_id).await?;
    let vendor_id = vendor
        .vendor_id
        .ok_or_else(|| AppError::Validation("Selected account is not a vendor".into()))?;
    let vendor_summary = VendorSummary {
        id: vendor.id,
        vendor_id,
        name: vendor.name,
        email: vendor.email,
        role: vendor.role,
    };

    Ok((category, sub_category, vendor_summary))
}

pub async fn create_product(backend: &Backend, form: ProductForm) -> AppResult<Product> {
    form.validate()?;
    let (category, sub_category, vendor) = resolve_snapshots(backend, &form).await?;

    let product = Product {
        id: Uuid::new_v4(),
        product_name: form.product_name,
        price: form.price,
        discount: form.discount,
        stock: form.stock,
        category_id: form.category_id,
        sub_category_id: form.sub_category_id,
        // The vendor's own id, not the admins-row id; vendor-scoped
        // listings filter on this field.
        vendor_id: vendor.vendor_id,
        category_details: category.summary(),
        sub_category_details: sub_category,
        vendor_details: vendor,
        images: form.images,
        // New products start visible.
        status: true,
    };

    backend.create("products", &product).await
}

/// Full-record update. The existing status flag is preserved; toggling
/// visibility goes through [`toggle_status`].
pub async fn update_product(backend: &Backend, id: Uuid, form: ProductForm) -> AppResult<Product> {
    form.validate()?;
    let existing: Product = backend.fetch_one("products", id).await?;
    let (category, sub_category, vendor) = resolve_snapshots(backend, &form).await?;

    let product = Product {
        id,
        product_name: form.product_name,
        price: form.price,
        discount: form.discount,
        stock: form.stock,
        category_id: form.category_id,
        sub_category_id: form.sub_category_id,
        vendor_id: vendor.vendor_id,
        category_details: category.summary(),
        sub_category_details: sub_category,
        vendor_details: vendor,
        images: form.images,
        status: existing.status,
    };

    backend.replace("products", id, &product).await
}

pub async fn delete_product(backend: &Backend, id: Uuid) -> AppResult<()> {
    backend.delete("products", id).await
}

/// Flip customer visibility with a minimal PATCH.
pub async fn toggle_status(backend: &Backend, id: Uuid, status: bool) -> AppResult<Product> {
    backend
        .patch("products", id, &serde_json::json!({ "status": status }))
        .await
}

/// Convenience wrapper: gate the route, then list with the caller's scope.
pub async fn list_for_session(
    backend: &Backend,
    store: &SessionStore,
    page: i64,
    limit: i64,
    filter: ProductFilter,
) -> AppResult<Vec<Product>> {
    let user = admin_auth::guard(store, &[Role::Admin, Role::Vendor])?;
    let filter = scope_for(&user, filter);
    list_products(backend, page, limit, &filter).await
}
