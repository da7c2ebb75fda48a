//! Subscription module - the ledger linking clients, services, and plans.

mod pricing;
mod subscription;

pub use pricing::discounted_price;
pub use subscription::Subscription;
