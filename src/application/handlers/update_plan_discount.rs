//! UpdatePlanDiscountHandler - administrative discount change with recompute fan-out.

use std::sync::Arc;

use crate::domain::catalog::Plan;
use crate::domain::foundation::{DiscountPercent, DomainError, ErrorCode, PlanId};
use crate::ports::{JobQueue, PlanRepository, RecomputeJob, SubscriptionRepository};

/// Command to replace a plan's discount percentage.
#[derive(Debug, Clone)]
pub struct UpdatePlanDiscountCommand {
    pub plan_id: PlanId,
    pub discount_percent: DiscountPercent,
}

/// Handler for plan discount updates.
///
/// Mirrors [`super::UpdateServicePriceHandler`]: compare against the loaded
/// snapshot, persist, then enqueue one job per dependent subscription only
/// when the discount actually changed. Enqueue failures are logged and
/// swallowed.
pub struct UpdatePlanDiscountHandler {
    plans: Arc<dyn PlanRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    jobs: Arc<dyn JobQueue>,
}

impl UpdatePlanDiscountHandler {
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        jobs: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            plans,
            subscriptions,
            jobs,
        }
    }

    pub async fn handle(&self, cmd: UpdatePlanDiscountCommand) -> Result<Plan, DomainError> {
        let mut plan = self.plans.find_by_id(&cmd.plan_id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::PlanNotFound,
                format!("Plan {} not found", cmd.plan_id),
            )
        })?;

        let old_discount = plan.discount_percent;

        plan.set_discount_percent(cmd.discount_percent);
        self.plans.update(&plan).await?;

        if old_discount != cmd.discount_percent {
            for subscription_id in self.subscriptions.ids_by_plan(&plan.id).await? {
                if let Err(err) = self.jobs.enqueue(RecomputeJob::new(subscription_id)).await {
                    tracing::warn!(
                        subscription_id = %subscription_id,
                        error = %err,
                        "failed to enqueue price recomputation job"
                    );
                }
            }
        }

        Ok(plan)
    }
}
