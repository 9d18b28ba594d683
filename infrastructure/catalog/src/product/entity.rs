use std::str::FromStr;

use bigdecimal::BigDecimal;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::ProductId;

/// Static catalog record, kept close to how the storefront data is authored.
#[derive(Debug, Clone, Copy)]
pub struct ProductEntity {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub original_price: Option<&'static str>,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: &'static [&'static str],
    pub in_stock: bool,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = parse_price(self.price)?;
        let original_price = self.original_price.map(parse_price).transpose()?;

        Product::new(NewProductProps {
            id: ProductId::from(self.id),
            name: self.name.to_string(),
            category: self.category.to_string(),
            price,
            original_price,
            image: self.image.to_string(),
            description: self.description.to_string(),
            specs: self.specs.iter().map(|s| s.to_string()).collect(),
            in_stock: self.in_stock,
        })
        .map_err(|_| RepositoryError::InvalidRecord)
    }
}

fn parse_price(raw: &str) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_str(raw).map_err(|_| RepositoryError::InvalidRecord)
}
