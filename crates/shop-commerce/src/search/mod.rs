//! Catalog search module.
//!
//! Contains the search request body, the query view state that discards
//! out-of-order responses, and the input debouncer.

mod debounce;
mod query;
mod view;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use query::{SearchRequest, DEFAULT_SEARCH_LIMIT};
pub use view::{CatalogQuery, SearchTicket};
