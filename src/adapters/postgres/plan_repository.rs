//! PostgreSQL implementation of PlanRepository.

use crate::domain::catalog::{Plan, PlanType};
use crate::domain::foundation::{DiscountPercent, DomainError, ErrorCode, PlanId};
use crate::ports::PlanRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the PlanRepository port.
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    /// Creates a new PostgresPlanRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a plan.
#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    plan_type: String,
    discount_percent: i32,
}

impl TryFrom<PlanRow> for Plan {
    type Error = DomainError;

    fn try_from(row: PlanRow) -> Result<Self, Self::Error> {
        let plan_type: PlanType = row.plan_type.parse().map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid plan_type: {}", e))
        })?;
        let discount_percent = DiscountPercent::try_from_i32(row.discount_percent).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid discount_percent: {}", e),
            )
        })?;

        Ok(Plan::new(
            PlanId::from_uuid(row.id),
            plan_type,
            discount_percent,
        ))
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn insert(&self, plan: &Plan) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO plans (id, plan_type, discount_percent) VALUES ($1, $2, $3)")
            .bind(plan.id.as_uuid())
            .bind(plan.plan_type.as_str())
            .bind(plan.discount_percent.as_i32())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert plan: {}", e))
            })?;

        Ok(())
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let result =
            sqlx::query("UPDATE plans SET plan_type = $2, discount_percent = $3 WHERE id = $1")
                .bind(plan.id.as_uuid())
                .bind(plan.plan_type.as_str())
                .bind(plan.discount_percent.as_i32())
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Failed to update plan: {}", e))
                })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::PlanNotFound, "Plan not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<Plan>, DomainError> {
        let row: Option<PlanRow> =
            sqlx::query_as("SELECT id, plan_type, discount_percent FROM plans WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Failed to find plan: {}", e))
                })?;

        row.map(Plan::try_from).transpose()
    }

    async fn delete(&self, id: &PlanId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.constraint() == Some("subscriptions_plan_id_fkey") {
                        return DomainError::new(
                            ErrorCode::HasDependentSubscriptions,
                            "Plan has dependent subscriptions",
                        );
                    }
                }
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to delete plan: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::PlanNotFound, "Plan not found"));
        }

        Ok(())
    }
}
