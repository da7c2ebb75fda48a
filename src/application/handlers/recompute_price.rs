//! RecomputePriceHandler - the asynchronous pricing job.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Price};
use crate::domain::subscription::discounted_price;
use crate::ports::{RecomputeJob, SubscriptionRepository};

/// Handler executed by the job worker for each dequeued [`RecomputeJob`].
///
/// Reads the subscription's current service price and plan discount, applies
/// the canonical floor computation, and persists the result. Because inputs
/// are fetched at execution time, duplicate and reordered deliveries of the
/// same job converge on the same stored value.
pub struct RecomputePriceHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl RecomputePriceHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    /// Runs one job. Returns the persisted price, or `None` when the
    /// subscription was deleted before the job ran.
    pub async fn handle(&self, job: RecomputeJob) -> Result<Option<Price>, DomainError> {
        let inputs = match self
            .subscriptions
            .pricing_inputs(&job.subscription_id)
            .await?
        {
            Some(inputs) => inputs,
            None => {
                tracing::debug!(
                    subscription_id = %job.subscription_id,
                    "subscription gone before recompute; skipping"
                );
                return Ok(None);
            }
        };

        let price = discounted_price(inputs.full_price, inputs.discount_percent);
        self.subscriptions
            .set_price(&job.subscription_id, price)
            .await?;

        tracing::debug!(
            subscription_id = %job.subscription_id,
            price = price.amount(),
            "recomputed subscription price"
        );

        Ok(Some(price))
    }
}
