//! Persistence side of the cart/wishlist/order reconciler.
//!
//! Every operation reads the cached customer, splices the relevant embedded
//! collection with the pure functions in [`crate::cart`], and sends exactly
//! one PATCH carrying the full resulting collection. The PATCH response is
//! the authoritative customer record and overwrites the session blob; on
//! failure nothing is written, so prior state stays intact.

use uuid::Uuid;

use crate::{
    backend::Backend,
    cart,
    error::{AppError, AppResult},
    models::{Customer, Order, Product},
    session::SessionStore,
};

fn current_customer(store: &SessionStore) -> AppResult<Customer> {
    store.load()?.ok_or(AppError::Forbidden)
}

async fn persist(
    backend: &Backend,
    store: &SessionStore,
    customer_id: Uuid,
    body: &serde_json::Value,
) -> AppResult<Customer> {
    let updated: Customer = backend.patch("customers", customer_id, body).await?;
    store.save(&updated)?;
    Ok(updated)
}

pub async fn add_to_cart(
    backend: &Backend,
    store: &SessionStore,
    product: &Product,
) -> AppResult<Customer> {
    let customer = current_customer(store)?;
    let next = cart::add_product(&customer.cart, product);
    persist(
        backend,
        store,
        customer.id,
        &serde_json::json!({ "cart": next }),
    )
    .await
}

pub async fn update_quantity(
    backend: &Backend,
    store: &SessionStore,
    entry_id: Uuid,
    count: i64,
) -> AppResult<Customer> {
    let customer = current_customer(store)?;
    let next = cart::set_quantity(&customer.cart, entry_id, count)?;
    persist(
        backend,
        store,
        customer.id,
        &serde_json::json!({ "cart": next }),
    )
    .await
}

pub async fn remove_from_cart(
    backend: &Backend,
    store: &SessionStore,
    entry_id: Uuid,
) -> AppResult<Customer> {
    let customer = current_customer(store)?;
    let next = cart::remove_entry(&customer.cart, entry_id);
    persist(
        backend,
        store,
        customer.id,
        &serde_json::json!({ "cart": next }),
    )
    .await
}

pub async fn toggle_wishlist(
    backend: &Backend,
    store: &SessionStore,
    product: &Product,
) -> AppResult<Customer> {
    let customer = current_customer(store)?;
    let next = cart::toggle_wishlist(&customer.wishlist, product);
    persist(
        backend,
        store,
        customer.id,
        &serde_json::json!({ "wishlist": next }),
    )
    .await
}

/// Snapshot the cart into a new order and clear the cart, both in the same
/// PATCH. Atomicity across the two collections is whatever the backend
/// gives a single document update; there is no rollback path.
pub async fn place_order(backend: &Backend, store: &SessionStore) -> AppResult<(Customer, Order)> {
    let customer = current_customer(store)?;
    let order = cart::build_order(&customer.cart)?;

    let mut orders = customer.orders.clone();
    orders.push(order.clone());

    let updated = persist(
        backend,
        store,
        customer.id,
        &serde_json::json!({ "cart": [], "orders": orders }),
    )
    .await?;
    Ok((updated, order))
}
