//! PostgreSQL implementation of SubscriptionReader.
//!
//! The listing price is annotated at query time from the joined catalog
//! tables rather than read from the persisted `price` column, so the API
//! stays accurate even while recomputation jobs are still in flight.
//! Integer division in Postgres truncates toward zero, which for the
//! non-negative operands here matches the floor rule used by the
//! recomputation job.

use crate::domain::catalog::PlanType;
use crate::domain::foundation::{
    DiscountPercent, DomainError, ErrorCode, Price, SubscriptionId,
};
use crate::ports::{SubscriptionListing, SubscriptionReader};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SubscriptionReader port.
pub struct PostgresSubscriptionReader {
    pool: PgPool,
}

impl PostgresSubscriptionReader {
    /// Creates a new PostgresSubscriptionReader with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Joined listing row.
#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: Uuid,
    client_company_name: Option<String>,
    client_email: Option<String>,
    plan_type: String,
    discount_percent: i32,
    computed_price: i64,
    comment: String,
    field_a: String,
    field_b: String,
}

impl TryFrom<ListingRow> for SubscriptionListing {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        let plan_type: PlanType = row.plan_type.parse().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid plan_type: {}", e))
        })?;
        let discount_percent = DiscountPercent::try_from_i32(row.discount_percent).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid discount_percent: {}", e),
            )
        })?;
        let computed_price = Price::try_from_i64(row.computed_price).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid computed_price: {}", e),
            )
        })?;

        Ok(SubscriptionListing {
            id: SubscriptionId::from_uuid(row.id),
            client_company_name: row.client_company_name,
            client_email: row.client_email,
            plan_type,
            discount_percent,
            computed_price,
            comment: row.comment,
            field_a: row.field_a,
            field_b: row.field_b,
        })
    }
}

#[async_trait]
impl SubscriptionReader for PostgresSubscriptionReader {
    async fn list(&self) -> Result<Vec<SubscriptionListing>, DomainError> {
        let rows: Vec<ListingRow> = sqlx::query_as(
            r#"
            SELECT s.id,
                   c.company_name AS client_company_name,
                   u.email AS client_email,
                   p.plan_type,
                   p.discount_percent,
                   sv.full_price - sv.full_price * p.discount_percent / 100
                       AS computed_price,
                   s.comment,
                   s.field_a,
                   s.field_b
            FROM subscriptions s
            JOIN services sv ON sv.id = s.service_id
            JOIN plans p ON p.id = s.plan_id
            LEFT JOIN clients c ON c.id = s.client_id
            LEFT JOIN users u ON u.id = c.user_id
            ORDER BY s.created_at ASC, s.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list subscriptions: {}", e),
            )
        })?;

        rows.into_iter().map(SubscriptionListing::try_from).collect()
    }
}
