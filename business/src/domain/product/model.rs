use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ProductError;
use crate::domain::cart::model::NewCartItem;
use crate::domain::shared::value_objects::ProductId;

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: BigDecimal,
    /// Struck-through list price for limited editions.
    pub original_price: Option<BigDecimal>,
    pub image: String,
    pub description: String,
    pub specs: Vec<String>,
    pub in_stock: bool,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub image: String,
    pub description: String,
    pub specs: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < BigDecimal::zero() {
            return Err(ProductError::NegativePrice);
        }

        if let Some(original) = &props.original_price
            && original < &props.price
        {
            return Err(ProductError::OriginalPriceBelowPrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            category: props.category,
            price: props.price,
            original_price: props.original_price,
            image: props.image,
            description: props.description,
            specs: props.specs,
            in_stock: props.in_stock,
        })
    }

    /// Case-insensitive category match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }

    /// Builds the add-to-cart payload from this product's display fields.
    pub fn to_cart_item(&self, quantity: u32) -> NewCartItem {
        NewCartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
            quantity,
        }
    }
}
