use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{Order, OrderConfirmation};
use crate::domain::checkout::services::OrderSubmitter;
use crate::domain::checkout::use_cases::submit::{SubmitCheckoutParams, SubmitCheckoutUseCase};
use crate::domain::logger::Logger;

pub struct SubmitCheckoutUseCaseImpl {
    pub store: Arc<CartStore>,
    pub submitter: Arc<dyn OrderSubmitter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitCheckoutUseCase for SubmitCheckoutUseCaseImpl {
    async fn execute(
        &self,
        params: SubmitCheckoutParams,
    ) -> Result<OrderConfirmation, CheckoutError> {
        self.logger.info("Submitting checkout");

        let cart = self.store.snapshot();
        let order = Order::from_cart(&cart, params.shipping).inspect_err(|e| {
            self.logger
                .warn(&format!("Checkout rejected: {}", e));
        })?;

        let confirmation = self.submitter.submit(&order).await.inspect_err(|e| {
            self.logger
                .error(&format!("Order {} submission failed: {}", order.id, e));
        })?;

        // Lines added while the order was in flight stay in the cart.
        self.store.remove_ordered(&order.items);

        self.logger.info(&format!(
            "Order {} placed: {} items, total {}",
            confirmation.order_id, confirmation.item_count, confirmation.total
        ));
        Ok(confirmation)
    }
}
