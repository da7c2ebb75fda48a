//! HTTP DTOs for the subscriptions API.
//!
//! These types define the JSON response structure for the read-only listing.
//! They serve as the boundary between HTTP and the application layer.

use crate::domain::catalog::PlanType;
use crate::ports::SubscriptionListing;
use serde::Serialize;

/// One subscription in the listing response.
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionListingResponse {
    /// Subscription ID.
    pub id: String,
    /// Company name of the owning client, null when client is unset.
    pub client_company_name: Option<String>,
    /// Email of the client's owning user, null when client is unset.
    pub client_email: Option<String>,
    /// Plan tier.
    pub plan_type: PlanType,
    /// Plan discount (0-100).
    pub discount_percent: u8,
    /// Price computed at query time from current service and plan data.
    pub price: u64,
    pub comment: String,
    pub field_a: String,
    pub field_b: String,
}

impl From<SubscriptionListing> for SubscriptionListingResponse {
    fn from(row: SubscriptionListing) -> Self {
        Self {
            id: row.id.to_string(),
            client_company_name: row.client_company_name,
            client_email: row.client_email,
            plan_type: row.plan_type,
            discount_percent: row.discount_percent.value(),
            price: row.computed_price.amount(),
            comment: row.comment,
            field_a: row.field_a,
            field_b: row.field_b,
        }
    }
}

/// Response for `GET /api/subscriptions`.
#[derive(Debug, Clone, Serialize)]
pub struct ListSubscriptionsResponse {
    pub subscriptions: Vec<SubscriptionListingResponse>,
}

/// Response for `GET /api/subscriptions/total`.
#[derive(Debug, Clone, Serialize)]
pub struct TotalSumResponse {
    /// Sum of all cached subscription prices.
    pub total: u64,
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DiscountPercent, Price, SubscriptionId};

    fn listing() -> SubscriptionListing {
        SubscriptionListing {
            id: SubscriptionId::new(),
            client_company_name: Some("Acme Corp".to_string()),
            client_email: Some("owner@acme.example".to_string()),
            plan_type: PlanType::Student,
            discount_percent: DiscountPercent::try_new(20).unwrap(),
            computed_price: Price::new(800),
            comment: "renewal".to_string(),
            field_a: "a".to_string(),
            field_b: "b".to_string(),
        }
    }

    #[test]
    fn listing_response_from_port_row() {
        let row = listing();
        let response = SubscriptionListingResponse::from(row.clone());

        assert_eq!(response.id, row.id.to_string());
        assert_eq!(response.plan_type, PlanType::Student);
        assert_eq!(response.discount_percent, 20);
        assert_eq!(response.price, 800);
    }

    #[test]
    fn listing_response_serializes_null_client_fields() {
        let mut row = listing();
        row.client_company_name = None;
        row.client_email = None;

        let json = serde_json::to_string(&SubscriptionListingResponse::from(row)).unwrap();
        assert!(json.contains(r#""client_company_name":null"#));
        assert!(json.contains(r#""client_email":null"#));
    }

    #[test]
    fn listing_response_serializes_plan_type_lowercase() {
        let json = serde_json::to_string(&SubscriptionListingResponse::from(listing())).unwrap();
        assert!(json.contains(r#""plan_type":"student""#));
    }

    #[test]
    fn total_sum_response_serializes() {
        let json = serde_json::to_string(&TotalSumResponse { total: 1300 }).unwrap();
        assert_eq!(json, r#"{"total":1300}"#);
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let response = ErrorResponse::new("DATABASE_ERROR", "Failed to list subscriptions");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""error_code":"DATABASE_ERROR""#));
    }
}
