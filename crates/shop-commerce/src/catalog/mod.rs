//! Product catalog module.
//!
//! Read-only records sourced from the backend: products and the
//! categories used to filter them.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
