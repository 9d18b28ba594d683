use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.get_all().await?;

        let products = match params.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => {
                self.logger
                    .info(&format!("Fetching products in category: {}", category));
                products
                    .into_iter()
                    .filter(|product| product.in_category(category))
                    .collect()
            }
            _ => {
                self.logger.info("Fetching all products");
                products
            }
        };

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Camera {}", id),
            category: category.to_string(),
            price: BigDecimal::from(1000),
            original_price: None,
            image: String::new(),
            description: String::new(),
            specs: vec![],
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Film Cameras"),
            product("2", "Digital Cameras"),
            product("4", "Film Cameras"),
        ]
    }

    #[tokio::test]
    async fn should_return_whole_catalog_without_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(catalog()));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams { category: None })
            .await;

        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_filter_by_category_ignoring_case() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(catalog()));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(GetAllProductsParams {
                category: Some("film cameras".to_string()),
            })
            .await
            .unwrap();

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[tokio::test]
    async fn should_treat_blank_category_as_no_filter() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(catalog()));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                category: Some("  ".to_string()),
            })
            .await;

        assert_eq!(result.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::InvalidRecord));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams { category: None })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
