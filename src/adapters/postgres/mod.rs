//! PostgreSQL adapter implementations.
//!
//! Implements the persistence ports using sqlx with connection pooling.
//! Foreign keys from subscriptions to services and plans are RESTRICT, so
//! the catalog repositories translate constraint violations into
//! `HasDependentSubscriptions` instead of surfacing raw database errors.

mod plan_repository;
mod service_repository;
mod subscription_reader;
mod subscription_repository;

pub use plan_repository::PostgresPlanRepository;
pub use service_repository::PostgresServiceRepository;
pub use subscription_reader::PostgresSubscriptionReader;
pub use subscription_repository::PostgresSubscriptionRepository;
