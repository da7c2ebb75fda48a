//! CreateSubscriptionHandler - insert a subscription and schedule its first pricing.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, DomainError, PlanId, ServiceId, SubscriptionId};
use crate::domain::subscription::Subscription;
use crate::ports::{JobQueue, RecomputeJob, SubscriptionRepository};

/// Command to enroll a client in a service under a plan.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionCommand {
    pub client_id: Option<ClientId>,
    pub service_id: ServiceId,
    pub plan_id: PlanId,
    pub comment: String,
    pub field_a: String,
    pub field_b: String,
}

/// Handler for subscription creation.
///
/// The new row is persisted with a zero price; exactly one recomputation job
/// for the new subscription's own id corrects it asynchronously. Enqueue
/// failures are logged and swallowed, leaving the price stale until the next
/// upstream change.
pub struct CreateSubscriptionHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
    jobs: Arc<dyn JobQueue>,
}

impl CreateSubscriptionHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>, jobs: Arc<dyn JobQueue>) -> Self {
        Self {
            subscriptions,
            jobs,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<Subscription, DomainError> {
        let subscription = Subscription::create(
            SubscriptionId::new(),
            cmd.client_id,
            cmd.service_id,
            cmd.plan_id,
            cmd.comment,
            cmd.field_a,
            cmd.field_b,
        );

        self.subscriptions.insert(&subscription).await?;

        if let Err(err) = self
            .jobs
            .enqueue(RecomputeJob::new(subscription.id))
            .await
        {
            tracing::warn!(
                subscription_id = %subscription.id,
                error = %err,
                "failed to enqueue price recomputation job for new subscription"
            );
        }

        Ok(subscription)
    }
}
