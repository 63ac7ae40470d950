//! Shopping cart module.
//!
//! `Cart` is the line-item reducer; `CartStore` wraps it together with the
//! drawer visibility flag that adding an item raises.

mod cart;
mod store;

pub use cart::{Cart, CartLine};
pub use store::CartStore;
