use uuid::Uuid;

use crate::{
    backend::{Backend, ListQuery},
    error::{AppError, AppResult},
    forms::auth::{LoginForm, RegisterForm},
    models::Customer,
    password::{hash_password, verify_password},
    session::SessionStore,
};

pub async fn email_exists(backend: &Backend, email: &str) -> AppResult<bool> {
    let matches: Vec<Customer> = backend
        .fetch_all("customers", &ListQuery::new().eq("email", email))
        .await?;
    Ok(!matches.is_empty())
}

pub async fn phone_exists(backend: &Backend, phone: &str) -> AppResult<bool> {
    let matches: Vec<Customer> = backend
        .fetch_all("customers", &ListQuery::new().eq("phone", phone))
        .await?;
    Ok(!matches.is_empty())
}

pub async fn register(
    backend: &Backend,
    store: &SessionStore,
    form: RegisterForm,
) -> AppResult<Customer> {
    form.validate()?;

    if email_exists(backend, &form.email).await? {
        return Err(AppError::Validation("Email is already registered".into()));
    }
    if phone_exists(backend, &form.phone).await? {
        return Err(AppError::Validation("Phone is already registered".into()));
    }

    let customer = Customer {
        id: Uuid::new_v4(),
        name: form.name,
        email: form.email,
        phone: form.phone,
        password: hash_password(&form.password)?,
        address: vec![],
        cart: vec![],
        wishlist: vec![],
        orders: vec![],
    };

    let created: Customer = backend.create("customers", &customer).await?;
    store.save(&created)?;
    Ok(created)
}

pub async fn login(
    backend: &Backend,
    store: &SessionStore,
    form: LoginForm,
) -> AppResult<Customer> {
    form.validate()?;

    let matches: Vec<Customer> = backend
        .fetch_all("customers", &ListQuery::new().eq("email", &form.email))
        .await?;
    // Unknown email and wrong password produce the same message.
    let customer = matches
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation("Invalid email or password".into()))?;

    if !verify_password(&form.password, &customer.password)? {
        return Err(AppError::Validation("Invalid email or password".into()));
    }

    store.save(&customer)?;
    Ok(customer)
}

pub fn logout(store: &SessionStore) -> AppResult<()> {
    store.clear()
}

/// Re-read the customer record from the backend and overwrite the session
/// blob with the authoritative copy.
pub async fn refresh(backend: &Backend, store: &SessionStore) -> AppResult<Customer> {
    let current: Customer = store.load()?.ok_or(AppError::Forbidden)?;
    let fresh: Customer = backend.fetch_one("customers", current.id).await?;
    store.save(&fresh)?;
    Ok(fresh)
}
