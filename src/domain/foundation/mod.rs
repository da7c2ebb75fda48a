//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the subscription ledger domain.

mod discount;
mod errors;
mod ids;
mod price;
mod timestamp;

pub use discount::DiscountPercent;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClientId, PlanId, ServiceId, SubscriptionId};
pub use price::Price;
pub use timestamp::Timestamp;
