#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.missing_field.{0}")]
    MissingField(&'static str),
    #[error("checkout.invalid_email")]
    InvalidEmail,
    #[error("checkout.submission_failed")]
    SubmissionFailed,
}
