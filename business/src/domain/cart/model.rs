use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::shared::value_objects::ProductId;

/// Payload of an add-to-cart request.
///
/// Everything except `quantity` is copied verbatim into the line item; the
/// cart does not re-validate price or availability.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub quantity: u32,
}

impl CartLineItem {
    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> BigDecimal {
        self.price.clone() * BigDecimal::from(self.quantity)
    }
}

/// Ordered list of line items, at most one per product id.
///
/// Items keep the order in which they were first added. Every quantity is at
/// least 1; the count and total are always computed from the items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Appends a new line, or adds the requested quantity to the existing
    /// line with the same id. A zero quantity counts as one unit.
    ///
    /// A line holds at most `u32::MAX` units; larger sums are capped there.
    pub fn add_item(&mut self, item: NewCartItem) {
        let quantity = item.quantity.max(1);

        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartLineItem {
                id: item.id,
                name: item.name,
                price: item.price,
                image: item.image,
                quantity,
            }),
        }
    }

    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|line| &line.id != id);
    }

    /// Sets the quantity of an existing line, clamped to at least 1.
    /// Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if let Some(line) = self.items.iter_mut().find(|line| &line.id == id) {
            line.quantity = clamp_quantity(quantity);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Takes the units of `ordered` out of the cart. Lines whose quantity
    /// drops to zero are removed; anything else added meanwhile stays.
    pub fn remove_ordered(&mut self, ordered: &[CartLineItem]) {
        for placed in ordered {
            if let Some(line) = self.items.iter_mut().find(|line| line.id == placed.id) {
                line.quantity = line.quantity.saturating_sub(placed.quantity);
            }
        }
        self.items.retain(|line| line.quantity > 0);
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> BigDecimal {
        self.items
            .iter()
            .map(CartLineItem::subtotal)
            .fold(BigDecimal::zero(), |acc, subtotal| acc + subtotal)
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}
