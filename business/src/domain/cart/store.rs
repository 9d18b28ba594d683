use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::shared::value_objects::ProductId;

use super::model::{Cart, CartLineItem, NewCartItem};
use super::subscriber::CartSubscriber;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// Single source of truth for the shopping cart.
///
/// All reads and writes go through the store. Each mutation runs to
/// completion and then notifies every subscriber with the new cart before
/// the lock is released, so subscribers observe changes in mutation order.
/// None of the operations can fail.
#[derive(Default)]
pub struct CartStore {
    cart: Mutex<Cart>,
    subscribers: Mutex<Vec<(SubscriptionId, Arc<dyn CartSubscriber>)>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&self, item: NewCartItem) {
        self.mutate(|cart| cart.add_item(item));
    }

    pub fn remove_item(&self, id: &ProductId) {
        self.mutate(|cart| cart.remove_item(id));
    }

    pub fn update_quantity(&self, id: &ProductId, quantity: i64) {
        self.mutate(|cart| cart.update_quantity(id, quantity));
    }

    pub fn clear_cart(&self) {
        self.mutate(Cart::clear);
    }

    /// Removes the units of a placed order, keeping lines added since.
    pub fn remove_ordered(&self, ordered: &[CartLineItem]) {
        self.mutate(|cart| cart.remove_ordered(ordered));
    }

    /// Read-only copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.lock_cart().clone()
    }

    pub fn item_count(&self) -> u64 {
        self.lock_cart().item_count()
    }

    pub fn total(&self) -> BigDecimal {
        self.lock_cart().total()
    }

    pub fn subscribe(&self, subscriber: Arc<dyn CartSubscriber>) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.lock_subscribers().push((id, subscriber));
        id
    }

    /// Returns false when the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.lock_subscribers();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    fn mutate(&self, apply: impl FnOnce(&mut Cart)) {
        let mut cart = self.lock_cart();
        apply(&mut *cart);

        let subscribers: Vec<Arc<dyn CartSubscriber>> = self
            .lock_subscribers()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in subscribers {
            subscriber.on_cart_changed(&cart);
        }
    }

    // A panicking subscriber cannot leave the item list half-written, so a
    // poisoned lock still guards a valid cart.
    fn lock_cart(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Arc<dyn CartSubscriber>)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[derive(Default)]
    struct RecordingSubscriber {
        seen: Mutex<Vec<(u64, BigDecimal)>>,
    }

    impl CartSubscriber for RecordingSubscriber {
        fn on_cart_changed(&self, cart: &Cart) {
            self.seen
                .lock()
                .unwrap()
                .push((cart.item_count(), cart.total()));
        }
    }

    impl RecordingSubscriber {
        fn seen(&self) -> Vec<(u64, BigDecimal)> {
            self.seen.lock().unwrap().clone()
        }
    }

    fn e39(quantity: u32) -> NewCartItem {
        NewCartItem {
            id: ProductId::from("e39"),
            name: "E39".to_string(),
            price: BigDecimal::from(1899),
            image: "e39.jpg".to_string(),
            quantity,
        }
    }

    #[test]
    fn should_notify_subscribers_after_each_mutation() {
        let store = CartStore::new();
        let subscriber = Arc::new(RecordingSubscriber::default());
        store.subscribe(subscriber.clone());

        store.add_item(e39(1));
        store.add_item(e39(1));
        store.update_quantity(&ProductId::from("e39"), 5);
        store.remove_item(&ProductId::from("e39"));

        assert_eq!(
            subscriber.seen(),
            vec![
                (1, BigDecimal::from(1899)),
                (2, BigDecimal::from(3798)),
                (5, BigDecimal::from(9495)),
                (0, BigDecimal::zero()),
            ]
        );
    }

    #[test]
    fn should_notify_when_ordered_units_are_removed() {
        let store = CartStore::new();
        store.add_item(e39(3));
        let ordered = store.snapshot().items().to_vec();
        store.add_item(e39(1));
        let subscriber = Arc::new(RecordingSubscriber::default());
        store.subscribe(subscriber.clone());

        store.remove_ordered(&ordered);

        assert_eq!(subscriber.seen(), vec![(1, BigDecimal::from(1899))]);
    }

    #[test]
    fn should_notify_even_when_operation_is_a_no_op() {
        let store = CartStore::new();
        let subscriber = Arc::new(RecordingSubscriber::default());
        store.subscribe(subscriber.clone());

        store.remove_item(&ProductId::from("missing"));
        store.update_quantity(&ProductId::from("missing"), 3);
        store.clear_cart();

        assert_eq!(subscriber.seen().len(), 3);
    }

    #[test]
    fn should_stop_notifying_after_unsubscribe() {
        let store = CartStore::new();
        let subscriber = Arc::new(RecordingSubscriber::default());
        let id = store.subscribe(subscriber.clone());

        store.add_item(e39(1));
        assert!(store.unsubscribe(id));
        store.add_item(e39(1));

        assert_eq!(subscriber.seen().len(), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn should_accept_closures_as_subscribers() {
        let store = CartStore::new();
        let counts = Arc::new(Mutex::new(Vec::new()));
        let sink = counts.clone();
        store.subscribe(Arc::new(move |cart: &Cart| {
            sink.lock().unwrap().push(cart.items().len());
        }));

        store.add_item(e39(2));
        store.clear_cart();

        assert_eq!(*counts.lock().unwrap(), vec![1, 0]);
    }

    #[test]
    fn should_expose_derived_values_after_mutation() {
        let store = CartStore::new();

        store.add_item(e39(2));

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total(), BigDecimal::from(3798));
        assert_eq!(store.snapshot().items().len(), 1);
    }

    #[test]
    fn should_reset_everything_on_clear() {
        let store = CartStore::new();
        store.add_item(e39(4));

        store.clear_cart();

        assert!(store.snapshot().is_empty());
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total(), BigDecimal::zero());
    }

    #[test]
    fn should_keep_state_consistent_across_threads() {
        let store = Arc::new(CartStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        store.add_item(e39(1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.snapshot().items().len(), 1);
        assert_eq!(store.item_count(), 200);
    }
}
