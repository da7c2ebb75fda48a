//! Total-sum cache port.
//!
//! A memoized aggregate over the set of active subscriptions. Deleting a
//! subscription evicts the entry; the next reader recomputes and
//! repopulates. Eviction of an absent entry is a successful no-op.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Port for the memoized total-sum aggregate.
#[async_trait]
pub trait TotalSumCache: Send + Sync {
    /// Returns the cached total, or `None` on a miss.
    async fn get(&self) -> Result<Option<u64>, DomainError>;

    /// Stores a freshly computed total.
    async fn set(&self, total: u64) -> Result<(), DomainError>;

    /// Evicts the cached total. Must succeed when the entry is absent.
    async fn invalidate(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sum_cache_is_object_safe() {
        fn _accepts_dyn(_cache: &dyn TotalSumCache) {}
    }
}
