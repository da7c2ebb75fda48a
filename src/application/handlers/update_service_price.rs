//! UpdateServicePriceHandler - administrative price change with recompute fan-out.

use std::sync::Arc;

use crate::domain::catalog::ServiceOffering;
use crate::domain::foundation::{DomainError, ErrorCode, Price, ServiceId};
use crate::ports::{JobQueue, RecomputeJob, ServiceRepository, SubscriptionRepository};

/// Command to replace a service's full price.
#[derive(Debug, Clone)]
pub struct UpdateServicePriceCommand {
    pub service_id: ServiceId,
    pub full_price: Price,
}

/// Handler for service price updates.
///
/// The comparison deciding whether to fan out recomputation jobs is made
/// against the value loaded from storage, not against any state hidden in
/// the aggregate: load, compare, persist, then enqueue. If the price is
/// unchanged no jobs are enqueued.
///
/// Enqueue failures are logged and swallowed (the price column is a derived
/// cache, not a source of truth), so a flaky queue never fails the save.
pub struct UpdateServicePriceHandler {
    services: Arc<dyn ServiceRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    jobs: Arc<dyn JobQueue>,
}

impl UpdateServicePriceHandler {
    pub fn new(
        services: Arc<dyn ServiceRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        jobs: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            services,
            subscriptions,
            jobs,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateServicePriceCommand,
    ) -> Result<ServiceOffering, DomainError> {
        // 1. Load the old snapshot
        let mut service = self
            .services
            .find_by_id(&cmd.service_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ServiceNotFound,
                    format!("Service {} not found", cmd.service_id),
                )
            })?;

        let old_price = service.full_price;

        // 2. Persist the new value; constraint violations surface here,
        //    before any job is enqueued
        service.set_full_price(cmd.full_price);
        self.services.update(&service).await?;

        // 3. Fan out one job per dependent subscription, only on change
        if old_price != cmd.full_price {
            for subscription_id in self.subscriptions.ids_by_service(&service.id).await? {
                if let Err(err) = self.jobs.enqueue(RecomputeJob::new(subscription_id)).await {
                    tracing::warn!(
                        subscription_id = %subscription_id,
                        error = %err,
                        "failed to enqueue price recomputation job"
                    );
                }
            }
        }

        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::jobs::InMemoryJobQueue;
    use crate::domain::foundation::{PlanId, SubscriptionId};
    use crate::domain::subscription::Subscription;
    use crate::ports::PricingInputs;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockServiceRepository {
        services: Mutex<Vec<ServiceOffering>>,
        updates: Mutex<Vec<ServiceOffering>>,
        fail_update: bool,
    }

    impl MockServiceRepository {
        fn with_service(service: ServiceOffering) -> Self {
            Self {
                services: Mutex::new(vec![service]),
                updates: Mutex::new(Vec::new()),
                fail_update: false,
            }
        }

        fn failing_update(service: ServiceOffering) -> Self {
            Self {
                services: Mutex::new(vec![service]),
                updates: Mutex::new(Vec::new()),
                fail_update: true,
            }
        }
    }

    #[async_trait]
    impl ServiceRepository for MockServiceRepository {
        async fn insert(&self, service: &ServiceOffering) -> Result<(), DomainError> {
            self.services.lock().unwrap().push(service.clone());
            Ok(())
        }

        async fn update(&self, service: &ServiceOffering) -> Result<(), DomainError> {
            if self.fail_update {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated update failure",
                ));
            }
            self.updates.lock().unwrap().push(service.clone());
            let mut services = self.services.lock().unwrap();
            if let Some(s) = services.iter_mut().find(|s| s.id == service.id) {
                *s = service.clone();
            }
            Ok(())
        }

        async fn find_by_id(
            &self,
            id: &ServiceId,
        ) -> Result<Option<ServiceOffering>, DomainError> {
            Ok(self
                .services
                .lock()
                .unwrap()
                .iter()
                .find(|s| &s.id == id)
                .cloned())
        }

        async fn delete(&self, _id: &ServiceId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    struct MockSubscriptionRepository {
        ids: Vec<SubscriptionId>,
    }

    #[async_trait]
    impl SubscriptionRepository for MockSubscriptionRepository {
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
            Ok(self.ids.clone())
        }

        async fn ids_by_plan(&self, _id: &PlanId) -> Result<Vec<SubscriptionId>, DomainError> {
            Ok(self.ids.clone())
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

    fn test_service(price: u64) -> ServiceOffering {
        ServiceOffering::new(ServiceId::new(), "Streaming", Price::new(price)).unwrap()
    }

    fn handler_with(
        service: ServiceOffering,
        dependent_ids: Vec<SubscriptionId>,
    ) -> (UpdateServicePriceHandler, Arc<InMemoryJobQueue>) {
        let queue = Arc::new(InMemoryJobQueue::new());
        let handler = UpdateServicePriceHandler::new(
            Arc::new(MockServiceRepository::with_service(service)),
            Arc::new(MockSubscriptionRepository { ids: dependent_ids }),
            queue.clone(),
        );
        (handler, queue)
    }

    #[tokio::test]
    async fn changed_price_enqueues_one_job_per_dependent_subscription() {
        let service = test_service(1000);
        let service_id = service.id;
        let ids = vec![SubscriptionId::new(), SubscriptionId::new(), SubscriptionId::new()];
        let (handler, queue) = handler_with(service, ids.clone());

        handler
            .handle(UpdateServicePriceCommand {
                service_id,
                full_price: Price::new(1200),
            })
            .await
            .unwrap();

        let enqueued = queue.enqueued_jobs();
        assert_eq!(enqueued.len(), 3);
        for id in ids {
            assert!(enqueued.iter().any(|j| j.subscription_id == id));
        }
    }

    #[tokio::test]
    async fn unchanged_price_enqueues_no_jobs() {
        let service = test_service(1000);
        let service_id = service.id;
        let (handler, queue) = handler_with(service, vec![SubscriptionId::new()]);

        handler
            .handle(UpdateServicePriceCommand {
                service_id,
                full_price: Price::new(1000),
            })
            .await
            .unwrap();

        assert!(queue.enqueued_jobs().is_empty());
    }

    #[tokio::test]
    async fn persists_new_price() {
        let service = test_service(1000);
        let service_id = service.id;
        let (handler, _queue) = handler_with(service, vec![]);

        let updated = handler
            .handle(UpdateServicePriceCommand {
                service_id,
                full_price: Price::new(750),
            })
            .await
            .unwrap();

        assert_eq!(updated.full_price, Price::new(750));
    }

    #[tokio::test]
    async fn fails_when_service_not_found() {
        let (handler, queue) = handler_with(test_service(1000), vec![SubscriptionId::new()]);

        let result = handler
            .handle(UpdateServicePriceCommand {
                service_id: ServiceId::new(),
                full_price: Price::new(500),
            })
            .await;

        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::ServiceNotFound,
                ..
            })
        ));
        assert!(queue.enqueued_jobs().is_empty());
    }

    #[tokio::test]
    async fn does_not_enqueue_when_persistence_fails() {
        let service = test_service(1000);
        let service_id = service.id;
        let queue = Arc::new(InMemoryJobQueue::new());
        let handler = UpdateServicePriceHandler::new(
            Arc::new(MockServiceRepository::failing_update(service)),
            Arc::new(MockSubscriptionRepository {
                ids: vec![SubscriptionId::new()],
            }),
            queue.clone(),
        );

        let result = handler
            .handle(UpdateServicePriceCommand {
                service_id,
                full_price: Price::new(500),
            })
            .await;

        assert!(result.is_err());
        assert!(queue.enqueued_jobs().is_empty());
    }

    #[tokio::test]
    async fn enqueue_failure_does_not_fail_the_save() {
        let service = test_service(1000);
        let service_id = service.id;
        let queue = Arc::new(InMemoryJobQueue::rejecting());
        let handler = UpdateServicePriceHandler::new(
            Arc::new(MockServiceRepository::with_service(service)),
            Arc::new(MockSubscriptionRepository {
                ids: vec![SubscriptionId::new()],
            }),
            queue,
        );

        let result = handler
            .handle(UpdateServicePriceCommand {
                service_id,
                full_price: Price::new(500),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().full_price, Price::new(500));
    }
}
