//! PostgreSQL implementation of SubscriptionRepository.

use crate::domain::foundation::{
    ClientId, DiscountPercent, DomainError, ErrorCode, PlanId, Price, ServiceId, SubscriptionId,
    Timestamp,
};
use crate::domain::subscription::Subscription;
use crate::ports::{PricingInputs, SubscriptionRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SubscriptionRepository port.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    /// Creates a new PostgresSubscriptionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a subscription.
#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    id: Uuid,
    client_id: Option<Uuid>,
    service_id: Uuid,
    plan_id: Uuid,
    price: i64,
    comment: String,
    field_a: String,
    field_b: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let price = Price::try_from_i64(row.price).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid price: {}", e))
        })?;

        Ok(Subscription {
            id: SubscriptionId::from_uuid(row.id),
            client_id: row.client_id.map(ClientId::from_uuid),
            service_id: ServiceId::from_uuid(row.service_id),
            plan_id: PlanId::from_uuid(row.plan_id),
            price,
            comment: row.comment,
            field_a: row.field_a,
            field_b: row.field_b,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

/// Pricing-inputs projection joined from the catalog tables.
#[derive(Debug, sqlx::FromRow)]
struct PricingInputsRow {
    full_price: i64,
    discount_percent: i32,
}

impl TryFrom<PricingInputsRow> for PricingInputs {
    type Error = DomainError;

    fn try_from(row: PricingInputsRow) -> Result<Self, Self::Error> {
        let full_price = Price::try_from_i64(row.full_price).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid full_price: {}", e))
        })?;
        let discount_percent = DiscountPercent::try_from_i32(row.discount_percent).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid discount_percent: {}", e),
            )
        })?;

        Ok(PricingInputs {
            full_price,
            discount_percent,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn insert(&self, subscription: &Subscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                id, client_id, service_id, plan_id, price,
                comment, field_a, field_b, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.client_id.map(|c| *c.as_uuid()))
        .bind(subscription.service_id.as_uuid())
        .bind(subscription.plan_id.as_uuid())
        .bind(subscription.price.as_i64())
        .bind(&subscription.comment)
        .bind(&subscription.field_a)
        .bind(&subscription.field_b)
        .bind(subscription.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                match db_err.constraint() {
                    Some("subscriptions_service_id_fkey") => {
                        return DomainError::new(ErrorCode::ServiceNotFound, "Service not found");
                    }
                    Some("subscriptions_plan_id_fkey") => {
                        return DomainError::new(ErrorCode::PlanNotFound, "Plan not found");
                    }
                    _ => {}
                }
            }
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert subscription: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT id, client_id, service_id, plan_id, price,
                   comment, field_a, field_b, created_at
            FROM subscriptions
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find subscription: {}", e),
            )
        })?;

        row.map(Subscription::try_from).transpose()
    }

    async fn delete(&self, id: &SubscriptionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete subscription: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SubscriptionNotFound,
                "Subscription not found",
            ));
        }

        Ok(())
    }

    async fn set_price(&self, id: &SubscriptionId, price: Price) -> Result<(), DomainError> {
        // Zero rows affected means the subscription was deleted after the
        // job was enqueued; nothing left to update.
        sqlx::query("UPDATE subscriptions SET price = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(price.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to set subscription price: {}", e),
                )
            })?;

        Ok(())
    }

    async fn ids_by_service(&self, id: &ServiceId) -> Result<Vec<SubscriptionId>, DomainError> {
        let ids: Vec<Uuid> =
            sqlx::query_scalar("SELECT id FROM subscriptions WHERE service_id = $1")
                .bind(id.as_uuid())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to list subscriptions by service: {}", e),
                    )
                })?;

        Ok(ids.into_iter().map(SubscriptionId::from_uuid).collect())
    }

    async fn ids_by_plan(&self, id: &PlanId) -> Result<Vec<SubscriptionId>, DomainError> {
        let ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM subscriptions WHERE plan_id = $1")
            .bind(id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list subscriptions by plan: {}", e),
                )
            })?;

        Ok(ids.into_iter().map(SubscriptionId::from_uuid).collect())
    }

    async fn pricing_inputs(
        &self,
        id: &SubscriptionId,
    ) -> Result<Option<PricingInputs>, DomainError> {
        let row: Option<PricingInputsRow> = sqlx::query_as(
            r#"
            SELECT sv.full_price, p.discount_percent
            FROM subscriptions s
            JOIN services sv ON sv.id = s.service_id
            JOIN plans p ON p.id = s.plan_id
            WHERE s.id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load pricing inputs: {}", e),
            )
        })?;

        row.map(PricingInputs::try_from).transpose()
    }

    async fn total_price_sum(&self) -> Result<u64, DomainError> {
        // SUM(bigint) is NUMERIC in Postgres; cast back so sqlx decodes i64.
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(price), 0)::BIGINT FROM subscriptions")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to sum subscription prices: {}", e),
                    )
                })?;

        Price::try_from_i64(total)
            .map(|p| p.amount())
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid total: {}", e)))
    }
}
