//! GetTotalSumHandler - memoized total-sum aggregate read.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{SubscriptionRepository, TotalSumCache};

/// Handler for the total-sum aggregate.
///
/// Cache-aside: return the memoized total when present, otherwise recompute
/// `SUM(price)` from the ledger and repopulate. A failing cache degrades to
/// recomputation on every read; it never fails the query.
pub struct GetTotalSumHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    cache: Arc<dyn TotalSumCache>,
}

impl GetTotalSumHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        cache: Arc<dyn TotalSumCache>,
    ) -> Self {
        Self {
            subscriptions,
            cache,
        }
    }

    pub async fn handle(&self) -> Result<u64, DomainError> {
        match self.cache.get().await {
            Ok(Some(total)) => return Ok(total),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "total-sum cache read failed; recomputing");
            }
        }

        let total = self.subscriptions.total_price_sum().await?;

        if let Err(err) = self.cache.set(total).await {
            tracing::warn!(error = %err, "failed to repopulate total-sum cache");
        }

        Ok(total)
    }
}
