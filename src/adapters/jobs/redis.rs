//! Redis-backed job queue for production deployments.
//!
//! Jobs are JSON payloads on a Redis list: LPUSH to enqueue, RPOP to
//! dequeue, so delivery is FIFO per producer. A job is removed from the list
//! when dequeued; a worker crash between dequeue and completion loses that
//! delivery, which the recalculation workflow tolerates because every
//! upstream change re-enqueues and the job is idempotent over current data.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{JobQueue, RecomputeJob};

const DEFAULT_QUEUE_KEY: &str = "subledger:jobs:recompute_price";

/// Redis list-backed job queue.
#[derive(Clone)]
pub struct RedisJobQueue {
    conn: MultiplexedConnection,
    key: String,
}

impl RedisJobQueue {
    /// Creates a queue on the default key.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            key: DEFAULT_QUEUE_KEY.to_string(),
        }
    }

    /// Overrides the list key (one queue per environment).
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

fn queue_error(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::QueueError, format!("Job queue error: {}", err))
}

#[async_trait]
impl JobQueue for RedisJobQueue {
    async fn enqueue(&self, job: RecomputeJob) -> Result<(), DomainError> {
        let payload = serde_json::to_string(&job).map_err(queue_error)?;

        let mut conn = self.conn.clone();
        conn.lpush::<_, _, ()>(&self.key, payload)
            .await
            .map_err(queue_error)?;

        Ok(())
    }

    async fn dequeue(&self) -> Result<Option<RecomputeJob>, DomainError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn
            .rpop(&self.key, None)
            .await
            .map_err(queue_error)?;

        match payload {
            Some(payload) => {
                let job = serde_json::from_str(&payload).map_err(queue_error)?;
                Ok(Some(job))
            }
            None => Ok(None),
        }
    }
}
