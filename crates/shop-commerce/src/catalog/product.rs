//! Product records.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product as returned by the catalog search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Backend document id.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Short marketing description.
    #[serde(default)]
    pub description: String,
    /// Unit price; never negative.
    pub price: Money,
    /// Category slug, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    /// Create a product.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            category: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category slug.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_backend_shape() {
        let json = r#"{"_id":"p1","title":"Agent Kit","description":"Starter","price":49.99}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.price.cents(), 4999);
        assert_eq!(product.category, None);
        assert_eq!(product.price_display(), "$49.99");
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let json = r#"{"_id":"p1","title":"Bad","description":"","price":-1}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_product_missing_description_defaults_empty() {
        let json = r#"{"_id":"p2","title":"Dashboards","price":120}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.description.is_empty());
    }
}
