//! Marketing content records: testimonials, portfolio, and blog posts.

use crate::ids::{PortfolioItemId, PostId, TestimonialId};
use serde::{Deserialize, Serialize};

/// A customer quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: TestimonialId,
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Testimonial {
    /// Attribution line, e.g. "Ada Lovelace · Analytical Engines".
    pub fn attribution(&self) -> String {
        match self.company.as_deref().filter(|c| !c.is_empty()) {
            Some(company) => format!("{} \u{00b7} {}", self.author, company),
            None => self.author.clone(),
        }
    }
}

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioItem {
    #[serde(rename = "_id")]
    pub id: PortfolioItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    /// Free-form metrics summary (e.g. "-40% latency").
    #[serde(default)]
    pub metrics: String,
}

/// A news or blog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BlogPost {
    /// Link target; `#` when the post has no URL.
    pub fn href(&self) -> &str {
        self.url.as_deref().unwrap_or("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonial_attribution() {
        let json = r#"{"_id":"t1","quote":"Great","author":"Sam","company":"Acme"}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.attribution(), "Sam \u{00b7} Acme");

        let json = r#"{"_id":"t2","quote":"Fine","author":"Lee"}"#;
        let t: Testimonial = serde_json::from_str(json).unwrap();
        assert_eq!(t.attribution(), "Lee");
    }

    #[test]
    fn test_blog_post_href_fallback() {
        let json = r#"{"_id":"b1","title":"Launch","content":"We shipped"}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.href(), "#");
    }

    #[test]
    fn test_portfolio_item_decodes() {
        let json = r#"{"_id":"x","title":"Ops","description":"d","url":"https://x.dev","metrics":"3x"}"#;
        let item: PortfolioItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.metrics, "3x");
    }
}
