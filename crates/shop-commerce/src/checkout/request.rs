//! Order request and response bodies for `POST /api/checkout`.

use crate::cart::{Cart, CartLine};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One line of an order request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub title: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl From<&CartLine> for CheckoutItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            title: line.title.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity(),
        }
    }
}

/// A snapshot of the cart submitted as an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRequest {
    /// Contact email; serialized as `null` when absent.
    pub email: Option<String>,
    pub items: Vec<CheckoutItem>,
}

impl CheckoutRequest {
    /// Snapshot a cart into an order request.
    pub fn from_cart(cart: &Cart, email: Option<String>) -> Self {
        Self {
            email,
            items: cart.lines().iter().map(CheckoutItem::from).collect(),
        }
    }
}

/// Backend reply to a successful checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutResponse {
    #[serde(default)]
    amount: Option<Money>,
}

impl CheckoutResponse {
    pub fn new(amount: Money) -> Self {
        Self {
            amount: Some(amount),
        }
    }

    /// Charged amount; zero when the backend omitted it.
    pub fn amount(&self) -> Money {
        self.amount.unwrap_or(Money::ZERO)
    }
}
