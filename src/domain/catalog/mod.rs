//! Catalog module - services and pricing plans.
//!
//! Pure data: a `ServiceOffering` carries a full price, a `Plan` carries a
//! percentage discount applied multiplicatively to that price.

mod plan;
mod service;

pub use plan::{Plan, PlanType};
pub use service::ServiceOffering;
