//! Pricing plan aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DiscountPercent, PlanId, ValidationError};

/// The fixed set of plan tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Full,
    Student,
    Discount,
}

impl PlanType {
    /// Returns the storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Full => "full",
            PlanType::Student => "student",
            PlanType::Discount => "discount",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(PlanType::Full),
            "student" => Ok(PlanType::Student),
            "discount" => Ok(PlanType::Discount),
            other => Err(ValidationError::invalid_format(
                "plan_type",
                format!("unknown plan type '{}'", other),
            )),
        }
    }
}

/// A named discount tier applied multiplicatively to a service's full price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub plan_type: PlanType,
    pub discount_percent: DiscountPercent,
}

impl Plan {
    /// Creates a new plan.
    pub fn new(id: PlanId, plan_type: PlanType, discount_percent: DiscountPercent) -> Self {
        Self {
            id,
            plan_type,
            discount_percent,
        }
    }

    /// Replaces the discount percentage.
    ///
    /// Whether the change triggers recomputation is decided by the caller,
    /// which holds the snapshot loaded from storage.
    pub fn set_discount_percent(&mut self, discount_percent: DiscountPercent) {
        self.discount_percent = discount_percent;
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} plan - {} off", self.plan_type, self.discount_percent)
    }
}
