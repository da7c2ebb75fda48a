//! Command and query handlers.
//!
//! Each handler owns one operation of the recalculation workflow and takes
//! its dependencies as `Arc<dyn Port>`, so the trigger logic is testable
//! without a database or queue.

mod create_subscription;
mod delete_subscription;
mod get_total_sum;
mod list_subscriptions;
mod recompute_price;
mod update_plan_discount;
mod update_service_price;

pub use create_subscription::{CreateSubscriptionCommand, CreateSubscriptionHandler};
pub use delete_subscription::{DeleteSubscriptionCommand, DeleteSubscriptionHandler};
pub use get_total_sum::GetTotalSumHandler;
pub use list_subscriptions::ListSubscriptionsHandler;
pub use recompute_price::RecomputePriceHandler;
pub use update_plan_discount::{UpdatePlanDiscountCommand, UpdatePlanDiscountHandler};
pub use update_service_price::{UpdateServicePriceCommand, UpdateServicePriceHandler};
