//! Job queue adapters.
//!
//! - `InMemoryJobQueue` - synchronous, deterministic queue for tests
//! - `RedisJobQueue` - Redis list-backed queue for production
//! - `JobWorker` - polling loop that drains the queue through the
//!   recomputation handler

mod in_memory;
mod redis;
mod worker;

pub use in_memory::InMemoryJobQueue;
pub use redis::RedisJobQueue;
pub use worker::JobWorker;
