pub mod address_service;
pub mod admin_auth;
pub mod admin_product_service;
pub mod cart_service;
pub mod category_service;
pub mod customer_auth;
pub mod product_service;
pub mod rates;
pub mod vendor_service;
