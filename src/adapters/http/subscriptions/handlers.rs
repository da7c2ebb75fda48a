//! HTTP handlers for the subscriptions API.
//!
//! These handlers connect axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{GetTotalSumHandler, ListSubscriptionsHandler};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{SubscriptionReader, SubscriptionRepository, TotalSumCache};

use super::dto::{
    ErrorResponse, ListSubscriptionsResponse, SubscriptionListingResponse, TotalSumResponse,
};

/// Shared application state containing the read-side dependencies.
///
/// Cloned per request; all dependencies are Arc-wrapped.
#[derive(Clone)]
pub struct SubscriptionsAppState {
    pub reader: Arc<dyn SubscriptionReader>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub total_sum_cache: Arc<dyn TotalSumCache>,
}

impl SubscriptionsAppState {
    /// Create handlers on demand from the shared state.
    pub fn list_handler(&self) -> ListSubscriptionsHandler {
        ListSubscriptionsHandler::new(self.reader.clone())
    }

    pub fn total_sum_handler(&self) -> GetTotalSumHandler {
        GetTotalSumHandler::new(self.subscriptions.clone(), self.total_sum_cache.clone())
    }
}

/// GET /api/subscriptions - List all subscriptions with computed prices
pub async fn list_subscriptions(
    State(state): State<SubscriptionsAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.list_handler().handle().await?;

    let response = ListSubscriptionsResponse {
        subscriptions: rows
            .into_iter()
            .map(SubscriptionListingResponse::from)
            .collect(),
    };

    Ok(Json(response))
}

/// GET /api/subscriptions/total - Sum of all cached subscription prices
pub async fn get_total_sum(
    State(state): State<SubscriptionsAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let total = state.total_sum_handler().handle().await?;

    Ok(Json(TotalSumResponse { total }))
}

/// API error type that converts domain errors to HTTP responses.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed | ErrorCode::OutOfRange => StatusCode::BAD_REQUEST,
            ErrorCode::ServiceNotFound
            | ErrorCode::PlanNotFound
            | ErrorCode::SubscriptionNotFound => StatusCode::NOT_FOUND,
            ErrorCode::HasDependentSubscriptions => StatusCode::CONFLICT,
            ErrorCode::DatabaseError
            | ErrorCode::CacheError
            | ErrorCode::QueueError
            | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse::new(self.0.code.to_string(), self.0.message);
        (status, Json(body)).into_response()
    }
}
