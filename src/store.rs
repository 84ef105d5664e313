use std::fmt;

use event_emitter_rs::EventEmitter;

use crate::cart::{Cart, LineItem};
use crate::product::{Product, ProductId};

/// Event name emitted after every cart state change.
pub const CART_CHANGED: &str = "CartChanged";

/// Observable wrapper that owns the cart and tells the world about it.
///
/// The store is the single source of truth for "what's in the cart". Every
/// command that actually changes state serializes the line-item list to JSON
/// and emits it under [`CART_CHANGED`]; observers re-derive whatever view
/// they need (badge counts, totals) from the payload. Commands that leave
/// the cart structurally unchanged emit nothing.
///
/// Listener delivery runs off-thread, so observers must not assume they run
/// before the next command. The in-memory cart is authoritative regardless
/// of what observers do with the notification.
///
/// # Example
///
/// ```ignore
/// use storefront_cart::CartStore;
///
/// let mut store = CartStore::new();
///
/// store.on_change(|snapshot| {
///     println!("cart is now: {}", snapshot);
/// });
///
/// store.add(product);
/// ```
pub struct CartStore {
    cart: Cart,
    emitter: EventEmitter,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore").field("cart", &self.cart).finish()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    /// Create a store around an empty cart.
    pub fn new() -> Self {
        Self::with_cart(Cart::new())
    }

    /// Create a store around an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        CartStore {
            cart,
            emitter: EventEmitter::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn subtotal(&self) -> rust_decimal::Decimal {
        self.cart.subtotal()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Register a listener for [`CART_CHANGED`]. The payload is the cart's
    /// line-item list serialized as a JSON array.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(CART_CHANGED, listener);
    }

    /// Replace the whole collection, e.g. with items rehydrated from a
    /// snapshot slot. Always notifies: a wholesale replacement is a state
    /// change by definition, and observers need to re-render from it.
    pub fn replace_all(&mut self, items: Vec<LineItem>) {
        self.cart.replace_all(items);
        self.notify();
    }

    /// Add one unit of `product` to the cart.
    pub fn add(&mut self, product: Product) {
        if self.cart.add(product) {
            self.notify();
        }
    }

    /// Remove the line for `id`, if present.
    pub fn remove(&mut self, id: &ProductId) {
        if self.cart.remove(id) {
            self.notify();
        }
    }

    /// Set the quantity for `id` to an absolute value; zero removes the line.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if self.cart.set_quantity(id, quantity) {
            self.notify();
        }
    }

    /// Bump the quantity for `id` by one, if present.
    pub fn increment(&mut self, id: &ProductId) {
        if self.cart.increment(id) {
            self.notify();
        }
    }

    /// Lower the quantity for `id` by one, removing the line at quantity 1.
    pub fn decrement(&mut self, id: &ProductId) {
        if self.cart.decrement(id) {
            self.notify();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if self.cart.clear() {
            self.notify();
        }
    }

    fn notify(&mut self) {
        match serde_json::to_string(self.cart.items()) {
            Ok(snapshot) => {
                self.emitter.emit(CART_CHANGED, snapshot);
            }
            Err(err) => log::error!("failed to serialize cart snapshot: {}", err),
        }
    }
}
