use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::submit::{SubmitCheckoutParams, SubmitCheckoutUseCase};

use crate::api::checkout::dto::{CheckoutRequest, CheckoutResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    submit_use_case: Arc<dyn SubmitCheckoutUseCase>,
}

impl CheckoutApi {
    pub fn new(submit_use_case: Arc<dyn SubmitCheckoutUseCase>) -> Self {
        Self { submit_use_case }
    }
}

/// Checkout API
#[OpenApi]
impl CheckoutApi {
    /// Place an order
    ///
    /// Validates the shipping details, submits the current cart as an order
    /// and empties the cart. No payment is taken.
    #[oai(path = "/checkout", method = "post", tag = "ApiTags::Checkout")]
    async fn submit(&self, body: Json<CheckoutRequest>) -> SubmitCheckoutResponse {
        let params = SubmitCheckoutParams {
            shipping: body.0.into(),
        };

        match self.submit_use_case.execute(params).await {
            Ok(confirmation) => SubmitCheckoutResponse::Created(Json(confirmation.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitCheckoutResponse::BadRequest(json),
                    409 => SubmitCheckoutResponse::Conflict(json),
                    _ => SubmitCheckoutResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitCheckoutResponse {
    #[oai(status = 201)]
    Created(Json<CheckoutResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
