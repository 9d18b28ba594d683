use poem_openapi::{Object, Union};

use business::domain::cart::model::{Cart, CartLineItem};
use business::domain::shared::value_objects::ProductId;

/// Product id as sent by clients: numeric (`1`) or a slug (`"e39"`).
#[derive(Debug, Clone, PartialEq, Union)]
pub enum ProductIdInput {
    Number(u64),
    Text(String),
}

impl From<ProductIdInput> for ProductId {
    fn from(input: ProductIdInput) -> Self {
        match input {
            ProductIdInput::Number(n) => ProductId::new(n.to_string()),
            ProductIdInput::Text(s) => ProductId::from(s),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog product identifier, numeric or slug
    pub product_id: ProductIdInput,
    /// Units to add (defaults to 1; 0 counts as 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemQuantityRequest {
    /// New quantity; values below 1 are stored as 1
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineItemResponse {
    /// Product identifier
    pub id: String,
    /// Product name at the time it was added
    pub name: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Image URL
    pub image: String,
    /// Units in the cart (always at least 1)
    pub quantity: u32,
    /// price × quantity as a decimal string
    pub subtotal: String,
}

impl From<&CartLineItem> for CartLineItemResponse {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            price: line.price.to_string(),
            image: line.image.clone(),
            quantity: line.quantity,
            subtotal: line.subtotal().to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Line items in the order they were first added
    pub items: Vec<CartLineItemResponse>,
    /// Sum of all quantities
    pub item_count: u64,
    /// Sum of all line subtotals as a decimal string
    pub total: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartLineItemResponse::from).collect(),
            item_count: cart.item_count(),
            total: cart.total().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_numeric_and_text_ids_to_the_same_product() {
        let numeric: ProductId = ProductIdInput::Number(1).into();
        let text: ProductId = ProductIdInput::Text("1".to_string()).into();

        assert_eq!(numeric, text);
        assert_eq!(numeric, ProductId::from(1));
    }
}
