//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ServiceRepository` / `PlanRepository` - catalog write side
//! - `SubscriptionRepository` - ledger write side and pricing lookups
//! - `SubscriptionReader` - read-only listing projection
//!
//! ## Boundary Ports
//!
//! - `JobQueue` - emits "recompute price(subscription_id)" tasks to the
//!   asynchronous task runner (at-least-once delivery)
//! - `TotalSumCache` - the memoized total-sum aggregate invalidated on
//!   subscription deletion

mod job_queue;
mod plan_repository;
mod service_repository;
mod subscription_reader;
mod subscription_repository;
mod total_sum_cache;

pub use job_queue::{JobQueue, RecomputeJob};
pub use plan_repository::PlanRepository;
pub use service_repository::ServiceRepository;
pub use subscription_reader::{SubscriptionListing, SubscriptionReader};
pub use subscription_repository::{PricingInputs, SubscriptionRepository};
pub use total_sum_cache::TotalSumCache;
