//! Subscription repository port (write side).
//!
//! Besides plain persistence, this port answers two questions the
//! recalculation workflow needs: which subscriptions depend on a given
//! service or plan, and what are the current pricing inputs for one
//! subscription.

use async_trait::async_trait;

use crate::domain::foundation::{
    DiscountPercent, DomainError, PlanId, Price, ServiceId, SubscriptionId,
};
use crate::domain::subscription::Subscription;

/// Current pricing inputs for one subscription, fetched at job execution
/// time so duplicate or reordered jobs converge on the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingInputs {
    pub full_price: Price,
    pub discount_percent: DiscountPercent,
}

/// Repository port for Subscription persistence.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a new subscription.
    async fn insert(&self, subscription: &Subscription) -> Result<(), DomainError>;

    /// Find a subscription by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError>;

    /// Delete a subscription.
    ///
    /// # Errors
    ///
    /// - `SubscriptionNotFound` if the subscription doesn't exist
    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError>;

    /// Persist a recomputed cached price.
    ///
    /// A missing subscription is not an error here: a recompute job may race
    /// a deletion, in which case there is nothing left to update.
    async fn set_price(&self, id: &SubscriptionId, price: Price) -> Result<(), DomainError>;

    /// IDs of all subscriptions referencing the given service.
    async fn ids_by_service(&self, id: &ServiceId) -> Result<Vec<SubscriptionId>, DomainError>;

    /// IDs of all subscriptions referencing the given plan.
    async fn ids_by_plan(&self, id: &PlanId) -> Result<Vec<SubscriptionId>, DomainError>;

    /// Current service price and plan discount for one subscription.
    ///
    /// Returns `None` if the subscription no longer exists.
    async fn pricing_inputs(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<PricingInputs>, DomainError>;

    /// Sum of all cached subscription prices.
    async fn total_price_sum(&self) -> Result<u64, DomainError>;
}
