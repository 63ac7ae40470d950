//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product entry in the cart.
///
/// Quantity is always at least 1.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price at the time the item was added.
    pub unit_price: Money,
    quantity: u32,
}

impl CartLine {
    fn new(product_id: ProductId, title: String, unit_price: Money) -> Self {
        Self {
            product_id,
            title,
            unit_price,
            quantity: 1,
        }
    }

    /// Quantity of this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// An ordered collection of line items, in first-added order.
///
/// Deserialized carts are normalized: quantities below 1 are raised to 1
/// and repeated lines for one product are merged into the first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "CartRecord")]
pub struct Cart {
    lines: Vec<CartLine>,
}

#[derive(Deserialize)]
struct CartRecord {
    #[serde(default)]
    lines: Vec<LineRecord>,
}

#[derive(Deserialize)]
struct LineRecord {
    product_id: ProductId,
    title: String,
    unit_price: Money,
    quantity: u32,
}

impl From<CartRecord> for Cart {
    fn from(record: CartRecord) -> Self {
        let mut cart = Cart::new();
        for line in record.lines {
            let quantity = line.quantity.max(1);
            match cart.lines.iter_mut().find(|l| l.product_id == line.product_id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
                None => cart.lines.push(CartLine {
                    quantity,
                    ..CartLine::new(line.product_id, line.title, line.unit_price)
                }),
            }
        }
        cart
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for this product, or appends a new line
    /// with quantity 1.
    pub fn add_item(&mut self, product: &Product) {
        self.add(product.id.clone(), product.title.clone(), product.price);
    }

    /// Add one unit of a product given its parts.
    pub fn add(&mut self, product_id: ProductId, title: impl Into<String>, unit_price: Money) {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self
                .lines
                .push(CartLine::new(product_id, title.into(), unit_price)),
        }
    }

    /// Set a line's quantity, clamping anything below 1 up to 1.
    ///
    /// Returns false if no line exists for `product_id`.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return false;
        };
        line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        true
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of unit price times quantity over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Total number of units (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_cents(cents))
    }

    #[test]
    fn test_add_item_appends_then_increments() {
        let mut cart = Cart::new();
        let a = product("a", 999);

        cart.add_item(&a);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 1);

        cart.add_item(&a);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 2);
    }

    /// Deterministic pseudo-random index sequences (LCG) of varying length.
    fn index_sequences(count: usize, max_len: usize, choices: usize) -> Vec<Vec<usize>> {
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        (0..count)
            .map(|n| {
                let len = 1 + n % max_len;
                (0..len)
                    .map(|_| {
                        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                        ((seed >> 33) as usize) % choices
                    })
                    .collect()
            })
            .collect()
    }

    fn assert_counts_match(products: &[Product], sequence: &[usize]) {
        let mut cart = Cart::new();
        let mut expected: HashMap<&str, u32> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();
        for &i in sequence {
            cart.add_item(&products[i]);
            let id = products[i].id.as_str();
            if !expected.contains_key(id) {
                first_seen.push(id);
            }
            *expected.entry(id).or_default() += 1;
        }

        assert_eq!(cart.lines().len(), expected.len(), "sequence {:?}", sequence);
        for line in cart.lines() {
            assert_eq!(line.quantity(), expected[line.product_id.as_str()]);
        }
        let order: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(order, first_seen);
    }

    #[test]
    fn test_add_sequence_counts_per_product() {
        let products = [product("a", 100), product("b", 200), product("c", 300)];

        // Boundaries: one add, and one product repeated.
        assert_counts_match(&products, &[1]);
        assert_counts_match(&products, &[2, 2, 2, 2, 2]);
        assert_counts_match(&products, &[0, 1, 0, 2, 2, 2, 1, 0]);

        for sequence in index_sequences(64, 20, products.len()) {
            assert_counts_match(&products, &sequence);
        }
    }

    #[test]
    fn test_deserialize_normalizes_lines() {
        let json = r#"{"lines":[
            {"product_id":"a","title":"A","unit_price":1.0,"quantity":0},
            {"product_id":"b","title":"B","unit_price":2.5,"quantity":1},
            {"product_id":"a","title":"A","unit_price":1.0,"quantity":3}
        ]}"#;
        let cart: Cart = serde_json::from_str(json).unwrap();

        let lines: Vec<(&str, u32)> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id.as_str(), l.quantity()))
            .collect();
        assert_eq!(lines, vec![("a", 4), ("b", 1)]);
        assert_eq!(cart.subtotal().display(), "$6.50");
    }

    #[test]
    fn test_serialized_cart_reads_back() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 999));
        cart.add_item(&product("a", 999));
        cart.add_item(&product("b", 450));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        let a = product("a", 100);
        cart.add_item(&a);

        for q in [0, -1, -500] {
            assert!(cart.set_quantity(&a.id, q));
            assert_eq!(cart.line(&a.id).unwrap().quantity(), 1);
        }

        assert!(cart.set_quantity(&a.id, 7));
        assert_eq!(cart.line(&a.id).unwrap().quantity(), 7);
    }

    #[test]
    fn test_set_quantity_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 100));
        let before = cart.clone();

        assert!(!cart.set_quantity(&ProductId::new("zzz"), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        let ten = product("ten", 1000);
        let five = product("five", 500);
        cart.add_item(&ten);
        cart.add_item(&ten);
        cart.add_item(&five);

        assert_eq!(cart.subtotal(), Money::from_cents(2500));
        assert_eq!(cart.subtotal().display(), "$25.00");
    }

    #[test]
    fn test_scenario_two_products() {
        let a = Product::new("A", "Product A", Money::from_decimal(9.99).unwrap());
        let b = Product::new("B", "Product B", Money::from_decimal(4.50).unwrap());

        let mut cart = Cart::new();
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);

        let lines: Vec<(&str, u32)> = cart
            .lines()
            .iter()
            .map(|l| (l.product_id.as_str(), l.quantity()))
            .collect();
        assert_eq!(lines, vec![("A", 2), ("B", 1)]);
        assert_eq!(cart.subtotal().display(), "$24.48");
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 100));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }
}
