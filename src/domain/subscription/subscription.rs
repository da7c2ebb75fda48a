//! Subscription aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClientId, PlanId, Price, ServiceId, SubscriptionId, Timestamp,
};

/// A client's enrollment in a service under a plan.
///
/// `price` is a cached derived value: it starts at zero and is corrected
/// asynchronously by the recomputation job, so it may briefly lag behind the
/// current service price and plan discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    /// May be unset when the owning client was removed upstream.
    pub client_id: Option<ClientId>,
    pub service_id: ServiceId,
    pub plan_id: PlanId,
    pub price: Price,
    pub comment: String,
    pub field_a: String,
    pub field_b: String,
    pub created_at: Timestamp,
}

impl Subscription {
    /// Creates a new subscription with the default (stale) zero price.
    pub fn create(
        id: SubscriptionId,
        client_id: Option<ClientId>,
        service_id: ServiceId,
        plan_id: PlanId,
        comment: impl Into<String>,
        field_a: impl Into<String>,
        field_b: impl Into<String>,
    ) -> Self {
        Self {
            id,
            client_id,
            service_id,
            plan_id,
            price: Price::ZERO,
            comment: comment.into(),
            field_a: field_a.into(),
            field_b: field_b.into(),
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_price_to_zero() {
        let sub = Subscription::create(
            SubscriptionId::new(),
            Some(ClientId::new()),
            ServiceId::new(),
            PlanId::new(),
            "first invoice",
            "a",
            "b",
        );
        assert_eq!(sub.price, Price::ZERO);
        assert_eq!(sub.comment, "first invoice");
    }

    #[test]
    fn create_allows_absent_client() {
        let sub = Subscription::create(
            SubscriptionId::new(),
            None,
            ServiceId::new(),
            PlanId::new(),
            "",
            "",
            "",
        );
        assert!(sub.client_id.is_none());
    }
}
