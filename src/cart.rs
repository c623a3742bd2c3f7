//! Pure splicing over a customer's embedded cart/wishlist/order collections.
//!
//! Nothing here touches the network. Every function takes the current
//! collection and returns the next one; callers persist the result with a
//! single PATCH and only then overwrite the cached session. A failed call
//! therefore leaves prior state untouched.

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{CartEntry, Order, OrderLine, Product, WishlistEntry};
use crate::pricing;

/// Add one unit of `product`. An entry already holding the same product id
/// gets its count bumped by 1; otherwise a new entry is appended with fresh
/// ids and count 1.
pub fn add_product(cart: &[CartEntry], product: &Product) -> Vec<CartEntry> {
    let mut next = cart.to_vec();
    if let Some(entry) = next
        .iter_mut()
        .find(|entry| entry.product_details.id == product.id)
    {
        entry.product_count += 1;
        return next;
    }
    next.push(CartEntry {
        id: Uuid::new_v4(),
        cart_id: Uuid::new_v4(),
        product_count: 1,
        product_details: product.clone(),
    });
    next
}

/// Replace the count of the entry with local id `entry_id`. Counts below 1
/// are rejected; dropping to zero goes through [`remove_entry`] instead.
pub fn set_quantity(cart: &[CartEntry], entry_id: Uuid, count: i64) -> AppResult<Vec<CartEntry>> {
    if count < 1 {
        return Err(AppError::Validation(
            "Product count cannot be less than 1.".into(),
        ));
    }
    let count = u32::try_from(count)
        .map_err(|_| AppError::Validation("Product count is too large".into()))?;
    let mut next = cart.to_vec();
    let entry = next
        .iter_mut()
        .find(|entry| entry.id == entry_id)
        .ok_or(AppError::NotFound)?;
    entry.product_count = count;
    Ok(next)
}

/// Remove an entry by its local entry id (not by product id).
pub fn remove_entry(cart: &[CartEntry], entry_id: Uuid) -> Vec<CartEntry> {
    cart.iter()
        .filter(|entry| entry.id != entry_id)
        .cloned()
        .collect()
}

pub fn in_wishlist(wishlist: &[WishlistEntry], product_id: Uuid) -> bool {
    wishlist
        .iter()
        .any(|entry| entry.product_details.id == product_id)
}

/// Binary wishlist membership: present removes by product id, absent appends
/// a new entry with fresh ids.
pub fn toggle_wishlist(wishlist: &[WishlistEntry], product: &Product) -> Vec<WishlistEntry> {
    if in_wishlist(wishlist, product.id) {
        return wishlist
            .iter()
            .filter(|entry| entry.product_details.id != product.id)
            .cloned()
            .collect();
    }
    let mut next = wishlist.to_vec();
    next.push(WishlistEntry {
        id: Uuid::new_v4(),
        wishlist_id: Uuid::new_v4(),
        product_details: product.clone(),
    });
    next
}

/// Fold the cart into a new order: every line is snapshotted with a fresh
/// line id, the total is the sum of discounted line totals and the order
/// date is taken now.
pub fn build_order(cart: &[CartEntry]) -> AppResult<Order> {
    if cart.is_empty() {
        return Err(AppError::Validation("Your cart is empty!".into()));
    }
    let products_ordered = cart
        .iter()
        .map(|entry| OrderLine {
            id: Uuid::new_v4(),
            product_count: entry.product_count,
            product_details: entry.product_details.clone(),
        })
        .collect();
    Ok(Order {
        id: Uuid::new_v4(),
        order_id: Uuid::new_v4(),
        order_date: Utc::now(),
        total_amount: pricing::grand_total(cart),
        products_ordered,
    })
}
