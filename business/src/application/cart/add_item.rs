use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        let quantity = params.quantity.unwrap_or(1);
        self.logger.info(&format!(
            "Adding {} x product {} to cart",
            quantity, params.product_id
        ));

        let product = self
            .repository
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.in_stock {
            self.logger.warn(&format!(
                "Product {} is out of stock, not adding to cart",
                product.id
            ));
            return Err(CartError::ProductUnavailable);
        }

        self.store.add_item(product.to_cart_item(quantity));

        let cart = self.store.snapshot();
        self.logger.info(&format!(
            "Cart now holds {} items, total {}",
            cart.item_count(),
            cart.total()
        ));
        Ok(cart)
    }
}
