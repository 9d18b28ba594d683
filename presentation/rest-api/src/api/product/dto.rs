use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier (numeric id or slug)
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Unit price as a decimal string
    pub price: String,
    /// List price before discount, for limited editions
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<String>,
    /// Image URL
    pub image: String,
    /// Marketing description
    pub description: String,
    /// Headline specifications
    pub specs: Vec<String>,
    /// Whether the product can be added to the cart
    pub in_stock: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            category: product.category,
            price: product.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()),
            image: product.image,
            description: product.description,
            specs: product.specs,
            in_stock: product.in_stock,
        }
    }
}
