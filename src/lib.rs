//! Subledger - Subscription ledger backend.
//!
//! Stores services, pricing plans, and subscriptions, derives a discounted
//! price per subscription through asynchronous recomputation jobs, and
//! exposes a read-only listing API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
