//! Search request body for `POST /api/products/search`.

use serde::{Deserialize, Serialize};

/// Number of products requested per search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 24;

/// Search filters sent to the backend.
///
/// Blank text and category are omitted from the JSON body entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub limit: u32,
}

impl SearchRequest {
    /// Build a request from raw input values.
    pub fn new(q: &str, category: &str, limit: u32) -> Self {
        Self {
            q: non_blank(q),
            category: non_blank(category),
            limit,
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_filters_omitted() {
        let request = SearchRequest::new("", "  ", DEFAULT_SEARCH_LIMIT);
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "limit": 24 }));
        assert_eq!(request, SearchRequest::default());
    }

    #[test]
    fn test_filters_included() {
        let request = SearchRequest::new(" agent ", "dashboards", 10);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "q": "agent", "category": "dashboards", "limit": 10 })
        );
    }
}
