//! Storefront domain types and client-side state.
//!
//! - **Catalog**: products and categories as the backend lists them
//! - **Cart**: the line-item reducer and the page-level cart store
//! - **Checkout**: order request wire types and the submission state machine
//! - **Search**: the catalog query view with stale-response discarding
//! - **Content**: testimonials, portfolio items, blog posts
//!
//! Everything here is synchronous and I/O free; the data crate drives the
//! network round trips and feeds results back in.
//!
//! # Example
//!
//! ```
//! use shop_commerce::prelude::*;
//!
//! let a = Product::new("A", "Product A", Money::from_decimal(9.99).unwrap());
//! let b = Product::new("B", "Product B", Money::from_decimal(4.50).unwrap());
//!
//! let mut store = CartStore::new();
//! store.add_item(&a);
//! store.add_item(&a);
//! store.add_item(&b);
//! assert_eq!(store.subtotal().display(), "$24.48");
//!
//! let mut submitter = CheckoutSubmitter::new();
//! let request = submitter.begin(store.cart(), None).unwrap();
//! assert_eq!(request.items.len(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod content;
pub mod search;
pub mod seo;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    pub use crate::cart::{Cart, CartLine, CartStore};
    pub use crate::catalog::{Category, Product};
    pub use crate::checkout::{
        CheckoutItem, CheckoutOutcome, CheckoutPhase, CheckoutRequest, CheckoutResponse,
        CheckoutSubmitter,
    };
    pub use crate::content::{BlogPost, PortfolioItem, Testimonial};
    pub use crate::search::{
        CatalogQuery, Debouncer, SearchRequest, SearchTicket, DEFAULT_DEBOUNCE_MS,
        DEFAULT_SEARCH_LIMIT,
    };
    pub use crate::seo::StoreSchema;
}
