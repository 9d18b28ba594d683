use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use super::seed::PRODUCTS;

/// Read-only catalog held in memory for the life of the process.
pub struct ProductRepositoryInMemory {
    products: Vec<Product>,
}

impl ProductRepositoryInMemory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds the repository from the bundled storefront catalog.
    pub fn seeded() -> Result<Self, RepositoryError> {
        Self::from_entities(PRODUCTS)
    }

    pub fn from_entities(entities: &[ProductEntity]) -> Result<Self, RepositoryError> {
        let products = entities
            .iter()
            .map(|entity| {
                entity.into_domain().inspect_err(|_| {
                    tracing::error!(product_id = entity.id, "invalid catalog record");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = products.len(), "catalog loaded");
        Ok(Self::new(products))
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::collections::HashSet;

    #[tokio::test]
    async fn should_seed_whole_catalog_in_order() {
        let repository = ProductRepositoryInMemory::seeded().unwrap();

        let products = repository.get_all().await.unwrap();

        assert_eq!(products.len(), PRODUCTS.len());
        assert_eq!(products[0].name, "Classic Film Camera");
        assert_eq!(
            products.last().unwrap().id,
            ProductId::from("sl3-professional")
        );
    }

    #[test]
    fn should_have_unique_ids_in_seed() {
        let ids: HashSet<&str> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[tokio::test]
    async fn should_find_product_by_numeric_or_slug_id() {
        let repository = ProductRepositoryInMemory::seeded().unwrap();

        let rangefinder = repository.get_by_id(&ProductId::from(4)).await.unwrap();
        let e39 = repository.get_by_id(&ProductId::from("e39")).await.unwrap();

        assert_eq!(rangefinder.name, "Vintage Rangefinder");
        assert_eq!(e39.price, BigDecimal::from(1899));
    }

    #[tokio::test]
    async fn should_serve_flagship_detail_pages() {
        let repository = ProductRepositoryInMemory::seeded().unwrap();

        for id in ["m11-monochrom", "q3-classic", "sl3-professional"] {
            let product = repository.get_by_id(&ProductId::from(id)).await.unwrap();
            assert!(product.in_stock);
        }
        let m11 = repository
            .get_by_id(&ProductId::from("m11-monochrom"))
            .await
            .unwrap();
        assert_eq!(m11.price, BigDecimal::from(68000));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let repository = ProductRepositoryInMemory::seeded().unwrap();

        let result = repository.get_by_id(&ProductId::from("coming-soon")).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn should_mark_medium_format_out_of_stock() {
        let repository = ProductRepositoryInMemory::seeded().unwrap();

        let product = repository.get_by_id(&ProductId::from(5)).await.unwrap();

        assert!(!product.in_stock);
    }

    #[test]
    fn should_fail_when_a_record_is_invalid() {
        let broken = [ProductEntity {
            price: "free",
            ..PRODUCTS[0]
        }];

        let result = ProductRepositoryInMemory::from_entities(&broken);

        assert!(matches!(result, Err(RepositoryError::InvalidRecord)));
    }
}
