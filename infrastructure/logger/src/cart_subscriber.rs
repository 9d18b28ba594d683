use business::domain::cart::model::Cart;
use business::domain::cart::subscriber::CartSubscriber;
use tracing::debug;

/// Cart subscriber that records every cart change as a structured event.
pub struct TracingCartSubscriber;

impl CartSubscriber for TracingCartSubscriber {
    fn on_cart_changed(&self, cart: &Cart) {
        debug!(
            target: "storefront::cart",
            lines = cart.items().len(),
            item_count = cart.item_count(),
            total = %cart.total(),
            "cart changed"
        );
    }
}
