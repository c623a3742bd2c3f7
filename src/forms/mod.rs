//! Form payloads and their pre-submit validation.

pub mod address;
pub mod auth;
pub mod categories;
pub mod products;
pub mod vendors;
