//! In-memory job queue implementation for testing.
//!
//! Provides deterministic FIFO delivery plus capture helpers for asserting
//! on enqueued jobs.
//!
//! # Security Note
//!
//! This adapter is for **testing only**. It uses `.expect()` on lock
//! operations which will panic if locks are poisoned. Production code should
//! use the Redis job queue adapter.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{JobQueue, RecomputeJob};

/// In-memory FIFO job queue for tests.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
pub struct InMemoryJobQueue {
    pending: Mutex<VecDeque<RecomputeJob>>,
    enqueued: Mutex<Vec<RecomputeJob>>,
    reject: bool,
}

impl InMemoryJobQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(VecDeque::new()),
            enqueued: Mutex::new(Vec::new()),
            reject: false,
        }
    }

    /// Creates a queue that rejects every enqueue, for failure-path tests.
    pub fn rejecting() -> Self {
        Self {
            pending: Mutex::new(VecDeque::new()),
            enqueued: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    // === Test Helpers ===

    /// Returns every successfully enqueued job, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn enqueued_jobs(&self) -> Vec<RecomputeJob> {
        self.enqueued
            .lock()
            .expect("InMemoryJobQueue: enqueued lock poisoned")
            .clone()
    }

    /// Returns the number of jobs still waiting to be dequeued.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .expect("InMemoryJobQueue: pending lock poisoned")
            .len()
    }

    /// Clears both the pending queue and the capture log.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.pending
            .lock()
            .expect("InMemoryJobQueue: pending lock poisoned")
            .clear();
        self.enqueued
            .lock()
            .expect("InMemoryJobQueue: enqueued lock poisoned")
            .clear();
    }
}

impl Default for InMemoryJobQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobQueue for InMemoryJobQueue {
    async fn enqueue(&self, job: RecomputeJob) -> Result<(), DomainError> {
        if self.reject {
            return Err(DomainError::new(
                ErrorCode::QueueError,
                "Simulated enqueue failure",
            ));
        }
        self.pending
            .lock()
            .expect("InMemoryJobQueue: pending lock poisoned")
            .push_back(job);
        self.enqueued
            .lock()
            .expect("InMemoryJobQueue: enqueued lock poisoned")
            .push(job);
        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<RecomputeJob>, DomainError> {
        Ok(self
            .pending
            .lock()
            .expect("InMemoryJobQueue: pending lock poisoned")
            .pop_front())
    }
}
