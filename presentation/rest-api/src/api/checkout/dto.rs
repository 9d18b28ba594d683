use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::checkout::model::{OrderConfirmation, ShippingDetails};

/// Shipping form. First name, email and address are required; they are
/// optional here so that missing fields are reported with a field code.
#[derive(Debug, Clone, Object)]
pub struct CheckoutRequest {
    #[oai(skip_serializing_if_is_none)]
    pub first_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub last_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub city: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub state: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub zip_code: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub country: Option<String>,
}

impl From<CheckoutRequest> for ShippingDetails {
    fn from(request: CheckoutRequest) -> Self {
        Self {
            first_name: request.first_name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone: request.phone.unwrap_or_default(),
            address: request.address.unwrap_or_default(),
            city: request.city.unwrap_or_default(),
            state: request.state.unwrap_or_default(),
            zip_code: request.zip_code.unwrap_or_default(),
            country: request.country.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckoutResponse {
    /// Order identifier
    pub order_id: String,
    /// Units ordered
    pub item_count: u64,
    /// Order total as a decimal string
    pub total: String,
    /// Time the order was accepted
    pub placed_at: DateTime<Utc>,
}

impl From<OrderConfirmation> for CheckoutResponse {
    fn from(confirmation: OrderConfirmation) -> Self {
        Self {
            order_id: confirmation.order_id.to_string(),
            item_count: confirmation.item_count,
            total: confirmation.total.to_string(),
            placed_at: confirmation.placed_at,
        }
    }
}
