//! Category types for product filtering.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: CategoryId,
    /// URL-friendly slug; this is the value sent as the search filter.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
}

impl Category {
    /// Create a category.
    pub fn new(id: impl Into<CategoryId>, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
        }
    }
}
