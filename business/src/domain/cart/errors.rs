#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_unavailable")]
    ProductUnavailable,
    #[error("repository.failure")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
