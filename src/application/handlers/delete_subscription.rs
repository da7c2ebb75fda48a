//! DeleteSubscriptionHandler - deletion with explicit cache invalidation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SubscriptionId};
use crate::ports::{SubscriptionRepository, TotalSumCache};

/// Command to delete a subscription.
#[derive(Debug, Clone)]
pub struct DeleteSubscriptionCommand {
    pub subscription_id: SubscriptionId,
}

/// Handler for subscription deletion.
///
/// Deletion and invalidation happen as one explicit step at this call site
/// rather than through a hidden post-delete hook. The invalidation always
/// runs after a successful delete; an already-evicted entry is a no-op, and
/// an unreachable cache is logged without failing the deletion.
pub struct DeleteSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    total_sum_cache: Arc<dyn TotalSumCache>,
}

impl DeleteSubscriptionHandler {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        total_sum_cache: Arc<dyn TotalSumCache>,
    ) -> Self {
        Self {
            subscriptions,
            total_sum_cache,
        }
    }

    pub async fn handle(&self, cmd: DeleteSubscriptionCommand) -> Result<(), DomainError> {
        self.subscriptions.delete(&cmd.subscription_id).await?;

        if let Err(err) = self.total_sum_cache.invalidate().await {
            tracing::warn!(
                subscription_id = %cmd.subscription_id,
                error = %err,
                "failed to invalidate total-sum cache after deletion"
            );
        }

        Ok(())
    }
}
