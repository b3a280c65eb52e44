//! # Cart State
//!
//! Session-scoped wrapper around the core [`Cart`].
//!
//! ## Ownership Model
//! One `CartState` per ordering session, created at startup and passed
//! explicitly to whichever command needs it — no process-wide singleton.
//! The `Arc<Mutex>` exists because the debounce scheduler runs on worker
//! tasks; user-intent mutations themselves are strictly sequential.
//!
//! ## Publish-on-Change
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  with_cart_mut(f) ──► f(&mut cart) ──► watch::Sender<CartTotals>  │
//! │                                               │                   │
//! │                          subscribers (totals display, debug log)  │
//! │                                                                   │
//! │  Derived values are recomputed on every publish, so observers     │
//! │  always see totals consistent with the line list.                 │
//! └───────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use ace_core::{Cart, CartTotals, TaxRate};

/// Shared cart state with change notification.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
    totals_tx: watch::Sender<CartTotals>,
}

impl CartState {
    /// Creates an empty cart for a new ordering session.
    pub fn new(tax_rate: TaxRate) -> Self {
        let cart = Cart::new(tax_rate);
        let (totals_tx, _) = watch::channel(CartTotals::from(&cart));
        CartState {
            cart: Arc::new(Mutex::new(cart)),
            totals_tx,
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart, then publishes
    /// fresh totals to all subscribers.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        let result = f(&mut cart);
        // send_replace never fails, even with zero receivers
        self.totals_tx.send_replace(CartTotals::from(&*cart));
        result
    }

    /// Subscribes to totals updates (publish-on-change data holder).
    pub fn subscribe(&self) -> watch::Receiver<CartTotals> {
        self.totals_tx.subscribe()
    }

    /// Current totals snapshot.
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::from(cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ace_core::{CartLine, LineOptions, MenuItem, Money};

    fn lemonade() -> MenuItem {
        MenuItem {
            id: "dr2".to_string(),
            category: "drinks".to_string(),
            name: "Fresh Lemonade".to_string(),
            price: Money::from_cents(1000),
            image: None,
            description: "Squeezed to order".to_string(),
            sizes: None,
            crusts: None,
            toppings: None,
        }
    }

    #[test]
    fn test_mutation_publishes_totals() {
        let state = CartState::new(TaxRate::from_bps(700));
        let rx = state.subscribe();

        state.with_cart_mut(|cart| {
            cart.add(CartLine::from_item(&lemonade(), LineOptions::default(), 2))
        });

        let totals = *rx.borrow();
        assert_eq!(totals.subtotal_cents, 2000);
        assert_eq!(totals.tax_cents, 140);
        assert_eq!(totals.total_cents, 2140);
    }

    #[tokio::test]
    async fn test_subscriber_sees_change_notification() {
        let state = CartState::new(TaxRate::from_bps(700));
        let mut rx = state.subscribe();

        state.with_cart_mut(|cart| {
            cart.add(CartLine::from_item(&lemonade(), LineOptions::default(), 1))
        });

        rx.changed().await.expect("sender alive");
        assert_eq!(rx.borrow_and_update().total_quantity, 1);
    }

    #[test]
    fn test_clear_resets_totals() {
        let state = CartState::new(TaxRate::from_bps(700));
        state.with_cart_mut(|cart| {
            cart.add(CartLine::from_item(&lemonade(), LineOptions::default(), 3))
        });
        state.with_cart_mut(|cart| cart.clear());

        let totals = state.totals();
        assert_eq!(totals.line_count, 0);
        assert_eq!(totals.total_cents, 0);
    }
}
