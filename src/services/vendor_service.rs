//! Vendor management. Vendors are rows of the admins collection with
//! `role = vendor`.

use uuid::Uuid;

use crate::{
    backend::{Backend, ListQuery},
    error::{AppError, AppResult},
    forms::vendors::{UpdateVendorForm, VendorForm},
    models::{AdminUser, Role},
    password::hash_password,
};

pub async fn list_vendors(backend: &Backend) -> AppResult<Vec<AdminUser>> {
    backend
        .fetch_all("admins", &ListQuery::new().eq("role", "vendor"))
        .await
}

pub async fn email_exists(backend: &Backend, email: &str) -> AppResult<bool> {
    let matches: Vec<AdminUser> = backend
        .fetch_all("admins", &ListQuery::new().eq("email", email))
        .await?;
    Ok(!matches.is_empty())
}

/// Create a vendor account with a hashed initial password. The
/// `reset_password` flag forces the one-time change modal on first login.
pub async fn create_vendor(backend: &Backend, form: VendorForm) -> AppResult<AdminUser> {
    form.validate()?;
    if email_exists(backend, &form.email).await? {
        return Err(AppError::Validation("Email is already registered".into()));
    }

    let vendor = AdminUser {
        id: Uuid::new_v4(),
        vendor_id: Some(Uuid::new_v4()),
        name: form.name,
        email: form.email,
        role: Role::Vendor,
        password: Some(hash_password(&form.password)?),
        reset_password: Some(true),
    };
    backend.create("admins", &vendor).await
}

pub async fn update_vendor(
    backend: &Backend,
    id: Uuid,
    form: UpdateVendorForm,
) -> AppResult<AdminUser> {
    form.validate()?;
    backend
        .patch(
            "admins",
            id,
            &serde_json::json!({ "name": form.name, "email": form.email }),
        )
        .await
}

pub async fn delete_vendor(backend: &Backend, id: Uuid) -> AppResult<()> {
    backend.delete("admins", id).await
}
