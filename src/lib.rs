//! Client library for a two-tenant storefront backed by a json-server
//! style REST API: typed models, the REST access layer, persistent session
//! blobs, the cart/wishlist/order reconciler, catalog caching, role-gated
//! admin operations and the metal-rates client.

pub mod backend;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod password;
pub mod pricing;
pub mod services;
pub mod session;
pub mod validate;
