use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemQuantityRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Reads and mutates the session cart. Mutations return the updated cart.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the line items with the derived item count and total.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Adding a product that is already in the cart increases its quantity.
    /// Out-of-stock products are rejected.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddCartItemParams {
            product_id: body.0.product_id.into(),
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddCartItemResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddCartItemResponse::NotFound(json),
                    409 => AddCartItemResponse::Conflict(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item quantity
    ///
    /// Quantities below 1 are stored as 1. Unknown items leave the cart
    /// unchanged.
    #[oai(path = "/cart/items/:id", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        id: Path<String>,
        body: Json<UpdateCartItemQuantityRequest>,
    ) -> UpdateCartItemQuantityResponse {
        let params = UpdateCartItemQuantityParams {
            product_id: ProductId::from(id.0),
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => UpdateCartItemQuantityResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateCartItemQuantityResponse::InternalError(json)
            }
        }
    }

    /// Remove an item
    ///
    /// Removing an item that is not in the cart is not an error.
    #[oai(path = "/cart/items/:id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, id: Path<String>) -> NoContentResponse {
        let params = RemoveCartItemParams {
            product_id: ProductId::from(id.0),
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(_) => NoContentResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                NoContentResponse::InternalError(json)
            }
        }
    }

    /// Clear the cart
    ///
    /// Removes every item.
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> NoContentResponse {
        match self.clear_use_case.execute().await {
            Ok(()) => NoContentResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                NoContentResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum NoContentResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
