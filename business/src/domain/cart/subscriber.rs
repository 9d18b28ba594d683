use super::model::Cart;

/// Observer notified after every cart mutation.
///
/// Called synchronously with the post-mutation cart while the store is
/// locked, so implementations must not call back into the store.
pub trait CartSubscriber: Send + Sync {
    fn on_cart_changed(&self, cart: &Cart);
}

impl<F> CartSubscriber for F
where
    F: Fn(&Cart) + Send + Sync,
{
    fn on_cart_changed(&self, cart: &Cart) {
        self(cart)
    }
}
