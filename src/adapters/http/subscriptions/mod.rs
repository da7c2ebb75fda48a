//! Read-only subscriptions API.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::SubscriptionsAppState;
pub use routes::subscriptions_router;
