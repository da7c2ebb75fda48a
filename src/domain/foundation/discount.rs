//! Discount percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A discount between 0 and 100 percent inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const ZERO: Self = Self(0);

    /// Full discount.
    pub const HUNDRED: Self = Self(100);

    /// Creates a DiscountPercent, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "discount_percent",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Creates a DiscountPercent from a signed storage value.
    pub fn try_from_i32(value: i32) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range(
                "discount_percent",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as i32 for database binding.
    pub fn as_i32(&self) -> i32 {
        i32::from(self.0)
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_try_new_accepts_valid_values() {
        assert_eq!(DiscountPercent::try_new(0).unwrap(), DiscountPercent::ZERO);
        assert!(DiscountPercent::try_new(50).is_ok());
        assert_eq!(
            DiscountPercent::try_new(100).unwrap(),
            DiscountPercent::HUNDRED
        );
    }

    #[test]
    fn discount_try_new_rejects_over_100() {
        let result = DiscountPercent::try_new(101);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            }) => {
                assert_eq!(field, "discount_percent");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn discount_try_from_i32_rejects_negative() {
        assert!(DiscountPercent::try_from_i32(-1).is_err());
        assert!(DiscountPercent::try_from_i32(101).is_err());
        assert_eq!(DiscountPercent::try_from_i32(20).unwrap().value(), 20);
    }

    #[test]
    fn discount_default_is_zero() {
        assert_eq!(DiscountPercent::default(), DiscountPercent::ZERO);
    }

    #[test]
    fn discount_displays_correctly() {
        assert_eq!(format!("{}", DiscountPercent::try_new(75).unwrap()), "75%");
    }

    #[test]
    fn discount_serializes_to_json() {
        let pct = DiscountPercent::try_new(42).unwrap();
        assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
    }
}
