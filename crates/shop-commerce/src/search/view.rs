//! Catalog query view state.

use crate::catalog::Product;
use crate::search::SearchRequest;

/// A search that has been issued and is waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    /// Monotonic sequence number of this request.
    pub seq: u64,
    /// Body to send.
    pub request: SearchRequest,
}

/// Search text, category filter, and the list currently displayed.
///
/// Every issued search gets a sequence number. Only the response to the
/// most recently issued search is applied; anything older is dropped, so a
/// slow early response can never overwrite a newer list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    query: String,
    category: String,
    results: Vec<Product>,
    pending: bool,
    issued: u64,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the search text. Returns true if it changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        true
    }

    /// Update the category slug (empty for all). Returns true if it changed.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if category == self.category {
            return false;
        }
        self.category = category;
        true
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Products currently displayed.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// True while the latest issued search has not resolved.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Sequence number of the latest issued search (0 before any).
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Issue a new search for the current filters.
    pub fn issue(&mut self, limit: u32) -> SearchTicket {
        self.issued += 1;
        self.pending = true;
        SearchTicket {
            seq: self.issued,
            request: SearchRequest::new(&self.query, &self.category, limit),
        }
    }

    /// Apply the response for search `seq`.
    ///
    /// Stale responses are ignored and false is returned. A failed search
    /// displays as an empty list.
    pub fn apply<E>(&mut self, seq: u64, result: Result<Vec<Product>, E>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.results = result.unwrap_or_default();
        self.pending = false;
        true
    }
}
