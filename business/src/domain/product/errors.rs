#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.original_price_below_price")]
    OriginalPriceBelowPrice,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.failure")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
