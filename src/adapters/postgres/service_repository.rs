//! PostgreSQL implementation of ServiceRepository.

use crate::domain::catalog::ServiceOffering;
use crate::domain::foundation::{DomainError, ErrorCode, Price, ServiceId};
use crate::ports::ServiceRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the ServiceRepository port.
pub struct PostgresServiceRepository {
    pool: PgPool,
}

impl PostgresServiceRepository {
    /// Creates a new PostgresServiceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a service offering.
#[derive(Debug, sqlx::FromRow)]
struct ServiceRow {
    id: Uuid,
    name: String,
    full_price: i64,
}

impl TryFrom<ServiceRow> for ServiceOffering {
    type Error = DomainError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        let full_price = Price::try_from_i64(row.full_price).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid full_price: {}", e))
        })?;

        ServiceOffering::new(ServiceId::from_uuid(row.id), row.name, full_price)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid name: {}", e)))
    }
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepository {
    async fn insert(&self, service: &ServiceOffering) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO services (id, name, full_price) VALUES ($1, $2, $3)")
            .bind(service.id.as_uuid())
            .bind(&service.name)
            .bind(service.full_price.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to insert service: {}", e))
            })?;

        Ok(())
    }

    async fn update(&self, service: &ServiceOffering) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE services SET name = $2, full_price = $3 WHERE id = $1")
            .bind(service.id.as_uuid())
            .bind(&service.name)
            .bind(service.full_price.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to update service: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ServiceNotFound,
                "Service not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ServiceId) -> Result<Option<ServiceOffering>, DomainError> {
        let row: Option<ServiceRow> =
            sqlx::query_as("SELECT id, name, full_price FROM services WHERE id = $1")
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Failed to find service: {}", e))
                })?;

        row.map(ServiceOffering::try_from).transpose()
    }

    async fn delete(&self, id: &ServiceId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.constraint() == Some("subscriptions_service_id_fkey") {
                        return DomainError::new(
                            ErrorCode::HasDependentSubscriptions,
                            "Service has dependent subscriptions",
                        );
                    }
                }
                DomainError::new(ErrorCode::DatabaseError, format!("Failed to delete service: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ServiceNotFound,
                "Service not found",
            ));
        }

        Ok(())
    }
}
