//! Discounted price computation.
//!
//! One canonical rounding rule for both the persisted price and the
//! query-time projection: integer floor. The SQL projection uses the same
//! expression with integer division, so the two paths cannot diverge.

use crate::domain::foundation::{DiscountPercent, Price};

/// Computes `full_price - full_price * discount_percent / 100`, floored.
///
/// For non-negative operands integer truncation equals floor. The result is
/// always within `0..=full_price`, so the function is total over its inputs
/// and idempotent with respect to repeated application on unchanged data.
pub fn discounted_price(full_price: Price, discount: DiscountPercent) -> Price {
    let full = full_price.amount();
    // Widened so the intermediate product cannot overflow near the storage
    // bound; the reduction itself is at most `full` and fits back in u64.
    let reduction = (u128::from(full) * u128::from(discount.value()) / 100) as u64;
    Price::new(full - reduction)
}
