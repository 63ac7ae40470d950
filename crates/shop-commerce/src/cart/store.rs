//! Page-level cart state.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// The cart plus the visibility of the cart drawer.
///
/// This is the single owned state container the views share; it is handed
/// to them explicitly rather than living in a global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    cart: Cart,
    open: bool,
}

impl CartStore {
    /// Create an empty, closed store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product` and reveal the drawer.
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add_item(product);
        self.open = true;
    }

    /// Set a line's quantity (clamped to at least 1).
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Empty the cart. Drawer visibility is left alone.
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    /// Current subtotal.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Borrow the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutably borrow the cart.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_opens_drawer() {
        let mut store = CartStore::new();
        assert!(!store.is_open());

        store.add_item(&Product::new("p", "P", Money::from_cents(100)));
        assert!(store.is_open());
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_drawer_toggle() {
        let mut store = CartStore::new();
        store.toggle();
        assert!(store.is_open());
        store.close();
        assert!(!store.is_open());
        store.open();
        store.toggle();
        assert!(!store.is_open());
    }

    #[test]
    fn test_clear_keeps_drawer_state() {
        let mut store = CartStore::new();
        store.add_item(&Product::new("p", "P", Money::from_cents(100)));
        store.clear();
        assert!(store.cart().is_empty());
        assert!(store.is_open());
    }
}
