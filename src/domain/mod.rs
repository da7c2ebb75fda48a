//! Domain layer - aggregates and value objects.

pub mod catalog;
pub mod foundation;
pub mod subscription;
