use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::store::CartStore;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            params.product_id, params.quantity
        ));

        if params.quantity < 1 {
            self.logger.debug(&format!(
                "Quantity {} clamped to 1 for product {}",
                params.quantity, params.product_id
            ));
        }

        self.store
            .update_quantity(&params.product_id, params.quantity);

        Ok(self.store.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::NewCartItem;
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use mockall::mock;

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

    fn store_with_e39() -> Arc<CartStore> {
        let store = Arc::new(CartStore::new());
        store.add_item(NewCartItem {
            id: ProductId::from(1),
            name: "E39".to_string(),
            price: BigDecimal::from(1899),
            image: String::new(),
            quantity: 2,
        });
        store
    }

    #[tokio::test]
    async fn should_set_quantity() {
        let use_case = UpdateCartItemQuantityUseCaseImpl {
            store: store_with_e39(),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(UpdateCartItemQuantityParams {
                product_id: ProductId::from(1),
                quantity: 5,
            })
            .await
            .unwrap();

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), BigDecimal::from(9495));
    }

    #[tokio::test]
    async fn should_clamp_zero_quantity_to_one() {
        let use_case = UpdateCartItemQuantityUseCaseImpl {
            store: store_with_e39(),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(UpdateCartItemQuantityParams {
                product_id: ProductId::from(1),
                quantity: 0,
            })
            .await
            .unwrap();

        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[tokio::test]
    async fn should_leave_cart_unchanged_when_item_absent() {
        let use_case = UpdateCartItemQuantityUseCaseImpl {
            store: store_with_e39(),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(UpdateCartItemQuantityParams {
                product_id: ProductId::from(42),
                quantity: 9,
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 2);
    }
}
