use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use business::domain::checkout::errors::CheckoutError;
use business::domain::checkout::model::{Order, OrderConfirmation};
use business::domain::checkout::services::OrderSubmitter;

/// Stand-in for a payment/order backend.
///
/// Waits for the configured processing delay, logs the order and confirms
/// it. Nothing is charged or stored.
pub struct SimulatedOrderSubmitter {
    processing_delay: Duration,
}

impl SimulatedOrderSubmitter {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    fn summary(order: &Order) -> serde_json::Value {
        let lines: Vec<serde_json::Value> = order
            .items
            .iter()
            .map(|line| {
                json!({
                    "product_id": line.id.as_str(),
                    "name": line.name,
                    "quantity": line.quantity,
                    "subtotal": line.subtotal().to_string(),
                })
            })
            .collect();
        let recipient = format!(
            "{} {}",
            order.shipping.first_name, order.shipping.last_name
        );

        json!({
            "order_id": order.id.to_string(),
            "placed_at": order.placed_at.to_rfc3339(),
            "item_count": order.item_count,
            "total": order.total.to_string(),
            "lines": lines,
            "ship_to": {
                "name": recipient.trim(),
                "city": order.shipping.city,
                "country": order.shipping.country,
            },
        })
    }
}

#[async_trait]
impl OrderSubmitter for SimulatedOrderSubmitter {
    async fn submit(&self, order: &Order) -> Result<OrderConfirmation, CheckoutError> {
        if order.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        tracing::info!(
            order = %Self::summary(order),
            "simulated order accepted (no payment taken)"
        );

        Ok(OrderConfirmation {
            order_id: order.id,
            item_count: order.item_count,
            total: order.total.clone(),
            placed_at: chrono::Utc::now(),
        })
    }
}
