//! Adapters - Implementations of the ports.

pub mod cache;
pub mod http;
pub mod jobs;
pub mod postgres;
