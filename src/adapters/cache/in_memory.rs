//! In-memory total-sum cache.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::DomainError;
use crate::ports::TotalSumCache;

/// Process-local total-sum cache.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned.
pub struct InMemoryTotalSumCache {
    total: Mutex<Option<u64>>,
}

impl InMemoryTotalSumCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            total: Mutex::new(None),
        }
    }
}

impl Default for InMemoryTotalSumCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TotalSumCache for InMemoryTotalSumCache {
    async fn get(&self) -> Result<Option<u64>, DomainError> {
        Ok(*self
            .total
            .lock()
            .expect("InMemoryTotalSumCache: lock poisoned"))
    }

    async fn set(&self, total: u64) -> Result<(), DomainError> {
        *self
            .total
            .lock()
            .expect("InMemoryTotalSumCache: lock poisoned") = Some(total);
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        *self
            .total
            .lock()
            .expect("InMemoryTotalSumCache: lock poisoned") = None;
        Ok(())
    }
}
