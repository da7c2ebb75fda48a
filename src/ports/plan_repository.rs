//! Plan repository port (write side).

use async_trait::async_trait;

use crate::domain::catalog::Plan;
use crate::domain::foundation::{DomainError, PlanId};

/// Repository port for pricing plans.
///
/// Implementations must enforce the 0-100 discount invariant at the storage
/// layer and reject deletion while dependent subscriptions exist.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Insert a new plan.
    async fn insert(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Persist the current state of an existing plan.
    ///
    /// # Errors
    ///
    /// - `PlanNotFound` if the plan doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, plan: &Plan) -> Result<(), DomainError>;

    /// Find a plan by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError>;

    /// Delete a plan.
    ///
    /// # Errors
    ///
    /// - `HasDependentSubscriptions` if subscriptions still reference it
    /// - `PlanNotFound` if the plan doesn't exist
    async fn delete(&self, id: &PlanId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PlanRepository) {}
    }
}
