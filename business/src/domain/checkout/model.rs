use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CheckoutError;
use crate::domain::cart::model::{Cart, CartLineItem};

/// Shipping form submitted at checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShippingDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingDetails {
    /// First name, email and address are required; the email must have a
    /// local part, an `@` and a dotted domain.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            ("first_name", &self.first_name),
            ("email", &self.email),
            ("address", &self.address),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CheckoutError::MissingField(*field));
        }

        let email_ok = regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
            .map(|re| re.is_match(self.email.trim()))
            .unwrap_or(false);
        if !email_ok {
            return Err(CheckoutError::InvalidEmail);
        }

        Ok(())
    }
}

/// Order handed to the submitter; a frozen copy of the cart at submission time.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<CartLineItem>,
    pub item_count: u64,
    pub total: BigDecimal,
    pub shipping: ShippingDetails,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn from_cart(cart: &Cart, shipping: ShippingDetails) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        shipping.validate()?;

        Ok(Self {
            id: Uuid::new_v4(),
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            total: cart.total(),
            shipping,
            placed_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub item_count: u64,
    pub total: BigDecimal,
    pub placed_at: DateTime<Utc>,
}
