//! Service repository port (write side).

use async_trait::async_trait;

use crate::domain::catalog::ServiceOffering;
use crate::domain::foundation::{DomainError, ServiceId};

/// Repository port for service offerings.
///
/// Implementations must enforce the non-negative price invariant at the
/// storage layer and reject deletion while dependent subscriptions exist.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Insert a new service.
    async fn insert(&self, service: &ServiceOffering) -> Result<(), DomainError>;

    /// Persist the current state of an existing service.
    ///
    /// # Errors
    ///
    /// - `ServiceNotFound` if the service doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, service: &ServiceOffering) -> Result<(), DomainError>;

    /// Find a service by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ServiceId) -> Result<Option<ServiceOffering>, DomainError>;

    /// Delete a service.
    ///
    /// # Errors
    ///
    /// - `HasDependentSubscriptions` if subscriptions still reference it
    /// - `ServiceNotFound` if the service doesn't exist
    async fn delete(&self, id: &ServiceId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ServiceRepository) {}
    }
}
