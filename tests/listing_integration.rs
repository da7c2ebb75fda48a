//! Integration tests for the read-only subscriptions API, exercising the
//! full axum router against in-memory adapters.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use subledger::adapters::cache::InMemoryTotalSumCache;
use subledger::adapters::http::subscriptions::{subscriptions_router, SubscriptionsAppState};
use subledger::domain::catalog::PlanType;
use subledger::domain::foundation::{
    DiscountPercent, DomainError, PlanId, Price, ServiceId, SubscriptionId,
};
use subledger::domain::subscription::Subscription;
use subledger::ports::{
    PricingInputs, SubscriptionListing, SubscriptionReader, SubscriptionRepository,
    TotalSumCache,
};

struct FixedReader {
    rows: Vec<SubscriptionListing>,
}

#[async_trait]
impl SubscriptionReader for FixedReader {
    async fn list(&self) -> Result<Vec<SubscriptionListing>, DomainError> {
        Ok(self.rows.clone())
    }
}

struct FixedRepository {
    total: u64,
}

#[async_trait]
impl SubscriptionRepository for FixedRepository {
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

    async fn ids_by_service(&self, _id: &ServiceId) -> Result<Vec<SubscriptionId>, DomainError> {
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
        Ok(self.total)
    }
}

fn listing_row(discount: u8, price: u64) -> SubscriptionListing {
    SubscriptionListing {
        id: SubscriptionId::new(),
        client_company_name: Some("Acme Corp".to_string()),
        client_email: Some("owner@acme.example".to_string()),
        plan_type: PlanType::Student,
        discount_percent: DiscountPercent::try_new(discount).unwrap(),
        computed_price: Price::new(price),
        comment: "renewal".to_string(),
        field_a: "a".to_string(),
        field_b: "b".to_string(),
    }
}

fn app(rows: Vec<SubscriptionListing>, total: u64) -> axum::Router {
    let state = SubscriptionsAppState {
        reader: Arc::new(FixedReader { rows }),
        subscriptions: Arc::new(FixedRepository { total }),
        total_sum_cache: Arc::new(InMemoryTotalSumCache::new()),
    };

    axum::Router::new()
        .nest("/api/subscriptions", subscriptions_router())
        .with_state(state)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn list_returns_rows_with_computed_prices() {
    let app = app(vec![listing_row(20, 800), listing_row(50, 500)], 0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscriptions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["subscriptions"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["price"], 800);
    assert_eq!(rows[0]["plan_type"], "student");
    assert_eq!(rows[0]["discount_percent"], 20);
    assert_eq!(rows[0]["client_company_name"], "Acme Corp");
    assert_eq!(rows[1]["price"], 500);
}

#[tokio::test]
async fn list_on_empty_ledger_returns_empty_array() {
    let app = app(vec![], 0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscriptions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["subscriptions"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_serializes_null_client_for_orphaned_subscription() {
    let mut row = listing_row(0, 100);
    row.client_company_name = None;
    row.client_email = None;
    let app = app(vec![row], 0);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscriptions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    let rows = json["subscriptions"].as_array().unwrap();
    assert!(rows[0]["client_company_name"].is_null());
    assert!(rows[0]["client_email"].is_null());
}

#[tokio::test]
async fn total_recomputes_on_cache_miss() {
    let app = app(vec![], 1300);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscriptions/total")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["total"], 1300);
}

#[tokio::test]
async fn total_prefers_cached_value() {
    let cache = Arc::new(InMemoryTotalSumCache::new());
    cache.set(999).await.unwrap();

    let state = SubscriptionsAppState {
        reader: Arc::new(FixedReader { rows: vec![] }),
        subscriptions: Arc::new(FixedRepository { total: 1300 }),
        total_sum_cache: cache,
    };
    let app = axum::Router::new()
        .nest("/api/subscriptions", subscriptions_router())
        .with_state(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/subscriptions/total")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_json(response).await["total"], 999);
}

#[tokio::test]
async fn write_endpoints_do_not_exist() {
    let app = app(vec![], 0);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/subscriptions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
