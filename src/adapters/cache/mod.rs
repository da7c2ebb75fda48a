//! Total-sum cache adapters.
//!
//! - `InMemoryTotalSumCache` - process-local cache for tests and single-node
//!   deployments
//! - `RedisTotalSumCache` - shared cache for multi-server deployments

mod in_memory;
mod redis;

pub use in_memory::InMemoryTotalSumCache;
pub use redis::RedisTotalSumCache;
