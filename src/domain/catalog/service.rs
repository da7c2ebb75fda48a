//! Service offering aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Price, ServiceId, ValidationError};

/// A billable service with a full (undiscounted) price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: ServiceId,
    pub name: String,
    pub full_price: Price,
}

impl ServiceOffering {
    /// Creates a new service offering.
    pub fn new(
        id: ServiceId,
        name: impl Into<String>,
        full_price: Price,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            full_price,
        })
    }

    /// Replaces the full price.
    ///
    /// Whether the change triggers recomputation is decided by the caller,
    /// which holds the snapshot loaded from storage.
    pub fn set_full_price(&mut self, full_price: Price) {
        self.full_price = full_price;
    }
}
