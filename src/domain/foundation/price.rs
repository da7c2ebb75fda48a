//! Non-negative integer price value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A non-negative whole-unit price.
///
/// The ledger stores prices as whole units; negative values cannot be
/// represented. Database columns use `BIGINT` with a CHECK, so conversions
/// from the storage layer go through [`Price::try_from_i64`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(0);

    /// Creates a new Price from a non-negative amount.
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Creates a Price from a signed storage value, rejecting negatives.
    pub fn try_from_i64(amount: i64) -> Result<Self, ValidationError> {
        if amount < 0 {
            return Err(ValidationError::out_of_range(
                "price",
                0,
                i64::MAX,
                amount,
            ));
        }
        Ok(Self(amount as u64))
    }

    /// Returns the amount as u64.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Returns the amount as i64 for database binding.
    pub fn as_i64(&self) -> i64 {
        self.0 as i64
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
