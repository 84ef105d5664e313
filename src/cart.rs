use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// One cart line: a product snapshot and how many of it the shopper wants.
///
/// A line item held by a [`Cart`] always has `quantity >= 1`; commands that
/// would drive a quantity to zero remove the line instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        LineItem { product, quantity }
    }

    /// Unit price times quantity, recomputed on every call.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered collection of line items, at most one per product id.
///
/// Insertion order is preserved so the UI renders a stable list. All
/// commands are synchronous and infallible; commands aimed at an id that is
/// not in the cart do nothing. Mutating commands report whether they changed
/// state so callers can skip notification and persistence on no-ops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn from_items(items: Vec<LineItem>) -> Self {
        Cart { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.product.id == *id)
            .map(|item| item.quantity)
    }

    /// Sum of line totals over all items, never cached.
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |total, item| total + item.line_total())
    }

    /// Total number of units across all line items.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Replace the whole collection. The caller is trusted to hand over
    /// items that already satisfy the dedup and quantity invariants; this
    /// path does not re-validate (see `CartSession` for the sanitizing
    /// boundary around stored snapshots).
    pub fn replace_all(&mut self, items: Vec<LineItem>) -> bool {
        self.items = items;
        true
    }

    /// Add one unit of `product`: bumps the existing line by exactly 1, or
    /// appends a new line with quantity 1.
    pub fn add(&mut self, product: Product) -> bool {
        match self.position_of(&product.id) {
            Some(index) => {
                self.items[index].quantity = self.items[index].quantity.saturating_add(1);
            }
            None => self.items.push(LineItem::new(product, 1)),
        }
        true
    }

    /// Remove the line for `id`. Returns false when no such line exists.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Set the quantity for `id` to an absolute value. A quantity of zero
    /// removes the line. Does nothing when the id is not in the cart.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };

        if quantity == 0 {
            self.items.remove(index);
            return true;
        }

        if self.items[index].quantity == quantity {
            return false;
        }

        self.items[index].quantity = quantity;
        true
    }

    /// Bump the quantity for `id` by one. Does nothing when absent.
    pub fn increment(&mut self, id: &ProductId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.items[index].quantity = self.items[index].quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Lower the quantity for `id` by one, removing the line at quantity 1
    /// so no zero-quantity line can survive. Does nothing when absent.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                if self.items[index].quantity > 1 {
                    self.items[index].quantity -= 1;
                } else {
                    self.items.remove(index);
                }
                true
            }
            None => false,
        }
    }

    /// Empty the cart. Returns false when it was already empty.
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        self.items.clear();
        true
    }

    fn position_of(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == *id)
    }
}
