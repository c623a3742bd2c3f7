//! Discount arithmetic and money formatting.
//!
//! Discounted unit prices are rounded to two decimal places with
//! round-half-away-from-zero before being multiplied by the quantity, so a
//! line total is always an exact multiple of its displayed unit price.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CartEntry;

/// `price - price * discount / 100`, rounded to 2 dp (half up).
pub fn discounted_price(price: Decimal, discount: Decimal) -> Decimal {
    let exact = price - price * discount / Decimal::ONE_HUNDRED;
    exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn line_total(entry: &CartEntry) -> Decimal {
    discounted_price(entry.product_details.price, entry.product_details.discount)
        * Decimal::from(entry.product_count)
}

pub fn grand_total(cart: &[CartEntry]) -> Decimal {
    cart.iter().map(line_total).sum()
}

/// Format an amount as Indian rupees with en-IN digit grouping: the last
/// three integer digits form one group, every group before that has two
/// digits (`₹12,34,567.89`).
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let cents = (rounded.abs() * Decimal::ONE_HUNDRED)
        .to_i128()
        .unwrap_or(0);
    let rupees = cents / 100;
    let paise = cents % 100;
    let grouped = group_indian(rupees);
    if negative {
        format!("-₹{grouped}.{paise:02}")
    } else {
        format!("₹{grouped}.{paise:02}")
    }
}

fn group_indian(value: i128) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
