use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{OrderConfirmation, ShippingDetails};

pub struct SubmitCheckoutParams {
    pub shipping: ShippingDetails,
}

#[async_trait]
pub trait SubmitCheckoutUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SubmitCheckoutParams,
    ) -> Result<OrderConfirmation, CheckoutError>;
}
