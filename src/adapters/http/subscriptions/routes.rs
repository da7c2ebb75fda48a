//! Axum router configuration for the subscriptions endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_total_sum, list_subscriptions, SubscriptionsAppState};

/// Create the subscriptions API router.
///
/// # Routes
///
/// - `GET /` - List all subscriptions with query-time computed prices
/// - `GET /total` - Sum of all cached subscription prices
///
/// Mount at `/api/subscriptions`. The surface is read-only; all writes go
/// through the application handlers directly.
pub fn subscriptions_router() -> Router<SubscriptionsAppState> {
    Router::new()
        .route("/", get(list_subscriptions))
        .route("/total", get(get_total_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::cache::InMemoryTotalSumCache;
    use crate::domain::foundation::{
        DomainError, PlanId, Price, ServiceId, SubscriptionId,
    };
    use crate::domain::subscription::Subscription;
    use crate::ports::{
        PricingInputs, SubscriptionListing, SubscriptionReader, SubscriptionRepository,
    };
    use async_trait::async_trait;

    struct EmptyReader;

    #[async_trait]
    impl SubscriptionReader for EmptyReader {
        async fn list(&self) -> Result<Vec<SubscriptionListing>, DomainError> {
            Ok(vec![])
        }
    }

    struct EmptyRepository;

    #[async_trait]
    impl SubscriptionRepository for EmptyRepository {
        async fn insert(&self, _subscription: &Subscription) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(
            &self,
            _id: &SubscriptionId,
        ) -> Result<Option<Subscription>, DomainError> {
            Ok(None)
        }

        async fn delete(&self, _id: &SubscriptionId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn set_price(&self, _id: &SubscriptionId, _price: Price) -> Result<(), DomainError> {
            Ok(())
        }

        async fn ids_by_service(
            &self,
            _id: &ServiceId,
        ) -> Result<Vec<SubscriptionId>, DomainError> {
            Ok(vec![])
        }

        async fn ids_by_plan(&self, _id: &PlanId) -> Result<Vec<SubscriptionId>, DomainError> {
            Ok(vec![])
        }

        async fn pricing_inputs(
            &self,
            _id: &SubscriptionId,
        ) -> Result<Option<PricingInputs>, DomainError> {
            Ok(None)
        }

        async fn total_price_sum(&self) -> Result<u64, DomainError> {
            Ok(0)
        }
    }

    fn test_state() -> SubscriptionsAppState {
        SubscriptionsAppState {
            reader: Arc::new(EmptyReader),
            subscriptions: Arc::new(EmptyRepository),
            total_sum_cache: Arc::new(InMemoryTotalSumCache::new()),
        }
    }

    #[test]
    fn subscriptions_router_creates_router() {
        let router = subscriptions_router();
        let _: Router<()> = router.with_state(test_state());
    }
}
