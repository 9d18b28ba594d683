use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_categories::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    /// Distinct categories in the order they first appear in the catalog.
    async fn execute(&self) -> Result<Vec<String>, ProductError> {
        self.logger.info("Fetching product categories");

        let products = self.repository.get_all().await?;

        let mut categories: Vec<String> = Vec::new();
        for product in products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }

        Ok(categories)
    }
}
