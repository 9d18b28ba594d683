use std::sync::Arc;

use catalog::product::repository::ProductRepositoryInMemory;
use logger::{TracingCartSubscriber, TracingLogger};
use orders::simulated_submitter::SimulatedOrderSubmitter;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::checkout::submit::SubmitCheckoutUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetCategoriesUseCaseImpl;
use business::domain::cart::store::CartStore;

use crate::config::checkout_config::CheckoutConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
}

impl DependencyContainer {
    pub fn new(checkout_config: &CheckoutConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryInMemory::seeded()?);
        let submitter = Arc::new(SimulatedOrderSubmitter::new(
            checkout_config.processing_delay,
        ));

        // One cart per process, shared by every handler
        let store = Arc::new(CartStore::new());
        store.subscribe(Arc::new(TracingCartSubscriber));

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: product_repository,
            store: store.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
        });

        // Checkout use cases
        let submit_checkout_use_case = Arc::new(SubmitCheckoutUseCaseImpl {
            store,
            submitter,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
            get_categories_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            update_quantity_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );

        let checkout_api =
            crate::api::checkout::routes::CheckoutApi::new(submit_checkout_use_case);

        Ok(Self {
            health_api,
            product_api,
            cart_api,
            checkout_api,
        })
    }
}
