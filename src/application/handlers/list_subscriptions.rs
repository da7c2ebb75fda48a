//! ListSubscriptionsHandler - query handler for the read-only listing.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{SubscriptionListing, SubscriptionReader};

/// Handler for the listing query.
///
/// The projection is computed entirely by the reader adapter (one joined
/// query with a computed price expression); this handler exists so the HTTP
/// layer depends on the application layer rather than on a port directly.
pub struct ListSubscriptionsHandler {
    reader: Arc<dyn SubscriptionReader>,
}

impl ListSubscriptionsHandler {
    pub fn new(reader: Arc<dyn SubscriptionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<SubscriptionListing>, DomainError> {
        self.reader.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::PlanType;
    use crate::domain::foundation::{DiscountPercent, Price, SubscriptionId};
    use async_trait::async_trait;

    struct MockReader {
        rows: Vec<SubscriptionListing>,
    }

    #[async_trait]
    impl SubscriptionReader for MockReader {
        async fn list(&self) -> Result<Vec<SubscriptionListing>, DomainError> {
            Ok(self.rows.clone())
        }
    }

    fn listing_row() -> SubscriptionListing {
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

    #[tokio::test]
    async fn returns_reader_rows() {
        let handler = ListSubscriptionsHandler::new(Arc::new(MockReader {
            rows: vec![listing_row(), listing_row()],
        }));

        let rows = handler.handle().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].computed_price, Price::new(800));
    }

    #[tokio::test]
    async fn empty_ledger_lists_nothing() {
        let handler = ListSubscriptionsHandler::new(Arc::new(MockReader { rows: vec![] }));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
