//! Job queue port - the asynchronous task-runner boundary.
//!
//! The core emits "recompute price(subscription_id)" tasks through this
//! port. Delivery is at-least-once with no ordering guarantee; duplicates
//! and reordering are harmless because the job itself is idempotent over
//! current data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SubscriptionId};

/// An asynchronous unit of work that refreshes one subscription's cached
/// price from current service and plan data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecomputeJob {
    pub subscription_id: SubscriptionId,
}

impl RecomputeJob {
    /// Creates a job for the given subscription.
    pub fn new(subscription_id: SubscriptionId) -> Self {
        Self { subscription_id }
    }
}

/// Port for the job queue boundary.
#[async_trait]
pub trait JobQueue: Send + Sync {
    /// Enqueue one recomputation job.
    async fn enqueue(&self, job: RecomputeJob) -> Result<(), DomainError>;

    /// Take the next job, if any.
    ///
    /// Non-blocking; the worker loop polls and sleeps between empty reads.
    async fn dequeue(&self) -> Result<Option<RecomputeJob>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_queue_is_object_safe() {
        fn _accepts_dyn(_queue: &dyn JobQueue) {}
    }

    #[test]
    fn recompute_job_round_trips_through_json() {
        let job = RecomputeJob::new(SubscriptionId::new());
        let json = serde_json::to_string(&job).unwrap();
        let back: RecomputeJob = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
