use async_trait::async_trait;

use super::errors::CheckoutError;
use super::model::{Order, OrderConfirmation};

/// Service port that accepts a finished order.
///
/// There is no payment backend; implementations may simulate processing.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit(&self, order: &Order) -> Result<OrderConfirmation, CheckoutError>;
}
