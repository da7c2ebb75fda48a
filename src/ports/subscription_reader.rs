//! Subscription reader port (read side).

use async_trait::async_trait;

use crate::domain::catalog::PlanType;
use crate::domain::foundation::{DiscountPercent, DomainError, Price, SubscriptionId};

/// One row of the read-only listing: subscription joined with plan fields
/// and a restricted client projection, annotated with the price computed at
/// query time (not the persisted cached price).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionListing {
    pub id: SubscriptionId,
    /// Company name of the owning client, absent when client is unset.
    pub client_company_name: Option<String>,
    /// Email of the client's owning user, absent when client is unset.
    pub client_email: Option<String>,
    pub plan_type: PlanType,
    pub discount_percent: DiscountPercent,
    /// Computed at query time from current service and plan data.
    pub computed_price: Price,
    pub comment: String,
    pub field_a: String,
    pub field_b: String,
}

/// Read-side port for the listing projection.
#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    /// All subscriptions with joined plan and client data.
    async fn list(&self) -> Result<Vec<SubscriptionListing>, DomainError>;
}
