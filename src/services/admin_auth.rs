use crate::{
    backend::{Backend, ListQuery},
    error::{AppError, AppResult},
    forms::auth::{ChangePasswordForm, LoginForm},
    models::{AdminUser, Role},
    password::{hash_password, verify_password},
    session::SessionStore,
};

pub async fn login(
    backend: &Backend,
    store: &SessionStore,
    form: LoginForm,
) -> AppResult<AdminUser> {
    form.validate()?;

    let matches: Vec<AdminUser> = backend
        .fetch_all("admins", &ListQuery::new().eq("email", &form.email))
        .await?;
    let user = matches
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation("Invalid email or password".into()))?;

    let stored_hash = user
        .password
        .as_deref()
        .ok_or_else(|| AppError::Validation("Invalid email or password".into()))?;
    if !verify_password(&form.password, stored_hash)? {
        return Err(AppError::Validation("Invalid email or password".into()));
    }

    store.save(&user)?;
    Ok(user)
}

pub fn logout(store: &SessionStore) -> AppResult<()> {
    store.clear()
}

/// One-time forced password change for accounts flagged with
/// `reset_password`. Clears the flag in the same PATCH.
pub async fn change_password(
    backend: &Backend,
    store: &SessionStore,
    form: ChangePasswordForm,
) -> AppResult<AdminUser> {
    form.validate()?;

    let current: AdminUser = store.load()?.ok_or(AppError::Forbidden)?;
    let body = serde_json::json!({
        "password": hash_password(&form.password)?,
        "reset_password": false,
    });
    let updated: AdminUser = backend.patch("admins", current.id, &body).await?;
    store.save(&updated)?;
    Ok(updated)
}

/// Gate a back-office route: load the stored session and check its role
/// against the route's allow-list. On any failure the session is cleared so
/// the caller lands back on the admin login screen.
pub fn guard(store: &SessionStore, allowed_roles: &[Role]) -> AppResult<AdminUser> {
    match store.load::<AdminUser>()? {
        Some(user) if allowed_roles.contains(&user.role) => Ok(user),
        _ => {
            store.clear()?;
            Err(AppError::Forbidden)
        }
    }
}
