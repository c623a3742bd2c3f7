use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendor,
}

/// A customer document as stored by the backend. Cart, wishlist and order
/// lines embed a full product snapshot frozen at add time; they are never
/// re-resolved against the products collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Argon2 hash, never the plaintext password.
    pub password: String,
    #[serde(default)]
    pub address: Vec<Address>,
    #[serde(default)]
    pub cart: Vec<CartEntry>,
    #[serde(default)]
    pub wishlist: Vec<WishlistEntry>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub address_id: Uuid,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: Uuid,
    pub cart_id: Uuid,
    /// Always >= 1; removing the last unit removes the entry instead.
    pub product_count: u32,
    pub product_details: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: Uuid,
    pub wishlist_id: Uuid,
    pub product_details: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub products_ordered: Vec<OrderLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: Uuid,
    pub product_count: u32,
    pub product_details: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub product_name: String,
    pub price: Decimal,
    /// Percentage, 0-100.
    pub discount: Decimal,
    pub stock: i32,
    pub category_id: Uuid,
    pub sub_category_id: Uuid,
    pub vendor_id: Uuid,
    pub category_details: CategorySummary,
    pub sub_category_details: SubCategory,
    pub vendor_details: VendorSummary,
    /// Absolute http(s) URLs.
    pub images: Vec<String>,
    /// Inactive products are hidden from the storefront.
    pub status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
}

/// The category snapshot embedded in products (no sub-category list).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: Uuid,
    pub category_id: Uuid,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: Uuid,
    pub sub_category_id: Uuid,
    pub sub_category_name: String,
    pub sub_category_icon: String,
}

/// Back-office account; vendors are admins with `role = vendor` and a
/// `vendor_id` of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Forces a one-time password-change on next login when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_password: Option<bool>,
}

/// The vendor snapshot embedded in products. Deliberately excludes the
/// password hash so product documents never carry credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorSummary {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Category {
    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id,
            category_id: self.category_id,
            category_name: self.category_name.clone(),
        }
    }
}

impl AdminUser {
    pub fn must_reset_password(&self) -> bool {
        self.reset_password.unwrap_or(false)
    }
}
