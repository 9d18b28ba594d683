use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::CheckoutError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CheckoutError::EmptyCart => (StatusCode::CONFLICT, "Conflict"),
            CheckoutError::MissingField(_) | CheckoutError::InvalidEmail => {
                (StatusCode::BAD_REQUEST, "ValidationError")
            }
            CheckoutError::SubmissionFailed => (StatusCode::BAD_GATEWAY, "SubmissionError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
