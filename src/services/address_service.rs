//! Customer delivery addresses. Like the cart, the address list is an
//! embedded collection on the customer document: append, send one PATCH
//! with the full resulting list, and overwrite the session blob with the
//! response.

use uuid::Uuid;

use crate::{
    backend::Backend,
    error::{AppError, AppResult},
    forms::address::AddressForm,
    models::{Address, Customer},
    session::SessionStore,
};

pub async fn add_address(
    backend: &Backend,
    store: &SessionStore,
    form: AddressForm,
) -> AppResult<Customer> {
    form.validate()?;
    let customer: Customer = store.load()?.ok_or(AppError::Forbidden)?;

    let mut next = customer.address.clone();
    next.push(Address {
        id: Uuid::new_v4(),
        address_id: Uuid::new_v4(),
        address_line: form.address_line,
        city: form.city,
        state: form.state,
        pincode: form.pincode,
    });

    let updated: Customer = backend
        .patch(
            "customers",
            customer.id,
            &serde_json::json!({ "address": next }),
        )
        .await?;
    store.save(&updated)?;
    Ok(updated)
}
