//! Recomputation worker loop.

use std::sync::Arc;
use std::time::Duration;

use crate::application::handlers::RecomputePriceHandler;
use crate::domain::foundation::DomainError;
use crate::ports::JobQueue;

/// Polling worker that drains the job queue through the recomputation
/// handler.
///
/// Failed jobs are logged and dropped from this delivery; the at-least-once
/// contract is carried by upstream re-enqueues, not by worker retries.
pub struct JobWorker {
    queue: Arc<dyn JobQueue>,
    handler: RecomputePriceHandler,
    poll_interval: Duration,
}

impl JobWorker {
    pub fn new(
        queue: Arc<dyn JobQueue>,
        handler: RecomputePriceHandler,
        poll_interval: Duration,
    ) -> Self {
        Self {
            queue,
            handler,
            poll_interval,
        }
    }

    /// Processes at most one job. Returns `true` when a job was taken.
    pub async fn tick(&self) -> Result<bool, DomainError> {
        let Some(job) = self.queue.dequeue().await? else {
            return Ok(false);
        };

        if let Err(err) = self.handler.handle(job).await {
            tracing::error!(
                subscription_id = %job.subscription_id,
                error = %err,
                "price recomputation job failed"
            );
        }

        Ok(true)
    }

    /// Runs the worker until the task is aborted.
    pub async fn run(self) {
        tracing::info!(poll_interval_ms = self.poll_interval.as_millis() as u64, "job worker started");
        loop {
            match self.tick().await {
                Ok(true) => {}
                Ok(false) => tokio::time::sleep(self.poll_interval).await,
                Err(err) => {
                    tracing::error!(error = %err, "job queue unavailable; backing off");
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }
}
