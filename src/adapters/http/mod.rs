//! HTTP adapters (axum).

pub mod subscriptions;
