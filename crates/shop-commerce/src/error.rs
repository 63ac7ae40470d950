//! Commerce error types.

use thiserror::Error;

/// Errors raised by storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Checkout attempted with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A checkout request is already outstanding.
    #[error("Checkout already in progress")]
    CheckoutInProgress,

    /// A completion arrived while no checkout was outstanding.
    #[error("No checkout in progress")]
    NoCheckoutInProgress,

    /// Price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
