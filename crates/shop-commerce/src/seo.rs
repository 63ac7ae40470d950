//! schema.org structured data published in the page head.

use serde::Serialize;

/// A schema.org `Store` description, serialized as JSON-LD.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StoreSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
}

impl StoreSchema {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            context: "https://schema.org",
            kind: "Store",
            name: name.into(),
            url: url.into(),
            same_as: Vec::new(),
        }
    }

    /// Add a profile URL for the same entity.
    pub fn with_same_as(mut self, url: impl Into<String>) -> Self {
        self.same_as.push(url.into());
        self
    }

    /// Render as a JSON-LD script body.
    pub fn to_json_ld(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
