//! Typed endpoints of the storefront backend.

use crate::{ApiConfig, FetchClient, FetchError, Transport};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use shop_commerce::catalog::{Category, Product};
use shop_commerce::checkout::{CheckoutRequest, CheckoutResponse};
use shop_commerce::content::{BlogPost, PortfolioItem, Testimonial};
use shop_commerce::search::SearchRequest;

const CATEGORIES_PATH: &str = "/api/categories";
const SEARCH_PATH: &str = "/api/products/search";
const TESTIMONIALS_PATH: &str = "/api/testimonials";
const PORTFOLIO_PATH: &str = "/api/portfolio";
const BLOG_PATH: &str = "/api/blog";
const CHECKOUT_PATH: &str = "/api/checkout";

#[derive(Deserialize)]
struct CategoriesBody {
    #[serde(default)]
    categories: Vec<Value>,
}

#[derive(Deserialize)]
struct ProductsBody {
    #[serde(default)]
    products: Vec<Value>,
}

#[derive(Deserialize)]
struct TestimonialsBody {
    #[serde(default)]
    testimonials: Vec<Value>,
}

#[derive(Deserialize)]
struct PortfolioBody {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Deserialize)]
struct BlogBody {
    #[serde(default)]
    posts: Vec<Value>,
}

/// Client for the storefront backend.
///
/// Every call is a single request with no retry; failures are returned
/// as-is and the caller decides whether to surface or swallow them.
#[derive(Debug, Clone)]
pub struct StorefrontApi<T> {
    client: FetchClient<T>,
}

impl<T: Transport> StorefrontApi<T> {
    pub fn new(transport: T, config: &ApiConfig) -> Self {
        Self {
            client: FetchClient::new(transport)
                .with_base_url(config.base_url.clone())
                .with_default_header("Accept", "application/json"),
        }
    }

    /// Wrap a pre-configured client.
    pub fn from_client(client: FetchClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &FetchClient<T> {
        &self.client
    }

    /// `GET /api/categories`
    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        let body: CategoriesBody = self
            .client
            .get(CATEGORIES_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(decode_each("category", body.categories))
    }

    /// `POST /api/products/search`
    pub async fn search_products(&self, request: &SearchRequest) -> Result<Vec<Product>, FetchError> {
        let body: ProductsBody = self
            .client
            .post(SEARCH_PATH)
            .json(request)?
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(decode_each("product", body.products))
    }

    /// `GET /api/testimonials`
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        let body: TestimonialsBody = self
            .client
            .get(TESTIMONIALS_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(decode_each("testimonial", body.testimonials))
    }

    /// `GET /api/portfolio`
    pub async fn portfolio(&self) -> Result<Vec<PortfolioItem>, FetchError> {
        let body: PortfolioBody = self
            .client
            .get(PORTFOLIO_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(decode_each("portfolio item", body.items))
    }

    /// `GET /api/blog`
    pub async fn blog(&self) -> Result<Vec<BlogPost>, FetchError> {
        let body: BlogBody = self
            .client
            .get(BLOG_PATH)
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(decode_each("blog post", body.posts))
    }

    /// `POST /api/checkout`
    pub async fn checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse, FetchError> {
        self.client
            .post(CHECKOUT_PATH)
            .json(request)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

/// Decode each record on its own so one bad record does not empty the list.
/// Records that do not fit are logged and dropped.
fn decode_each<V: DeserializeOwned>(what: &'static str, records: Vec<Value>) -> Vec<V> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed {}", what);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Method, MockTransport};
    use serde_json::json;
    use shop_commerce::cart::Cart;
    use shop_commerce::Money;
    use std::sync::Arc;

    fn api() -> (Arc<MockTransport>, StorefrontApi<Arc<MockTransport>>) {
        let transport = Arc::new(MockTransport::new());
        let config = ApiConfig::default().with_base_url("http://backend.test");
        (transport.clone(), StorefrontApi::new(transport, &config))
    }

    #[tokio::test]
    async fn test_categories() {
        let (transport, api) = api();
        transport.push_json(json!({
            "categories": [{ "_id": "c1", "slug": "agents", "title": "Agents" }]
        }));

        let categories = api.categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "agents");

        let sent = transport.requests();
        assert_eq!(sent[0].method(), Method::Get);
        assert_eq!(sent[0].url(), "http://backend.test/api/categories");
    }

    #[tokio::test]
    async fn test_search_posts_filters() {
        let (transport, api) = api();
        transport.push_json(json!({
            "products": [{ "_id": "p1", "title": "Kit", "description": "d", "price": 9.99 }]
        }));

        let request = SearchRequest::new("kit", "", 24);
        let products = api.search_products(&request).await.unwrap();
        assert_eq!(products[0].price, Money::from_cents(999));

        let sent = transport.requests();
        assert_eq!(sent[0].method(), Method::Post);
        assert_eq!(sent[0].url(), "http://backend.test/api/products/search");
        assert_eq!(sent[0].json_body(), Some(json!({ "q": "kit", "limit": 24 })));
    }

    #[tokio::test]
    async fn test_search_skips_bad_products() {
        let (transport, api) = api();
        transport.push_json(json!({
            "products": [
                { "_id": "p1", "title": "Kit", "price": 10 },
                { "_id": "p2", "title": "Refund", "price": -5 },
                { "_id": "p3", "title": "Mystery", "price": "free" },
                { "_id": "p4", "title": "Pro", "price": 25.5 }
            ]
        }));

        let products = api
            .search_products(&SearchRequest::new("", "", 24))
            .await
            .unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p4"]);
        assert_eq!(products[1].price, Money::from_cents(2550));
    }

    #[tokio::test]
    async fn test_products_not_a_list_is_malformed() {
        let (transport, api) = api();
        transport.push_json(json!({ "products": "none" }));

        let err = api
            .search_products(&SearchRequest::new("", "", 24))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::Malformed);
    }

    #[tokio::test]
    async fn test_missing_envelope_field_is_empty() {
        let (transport, api) = api();
        transport.push_json(json!({}));
        assert!(api.testimonials().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_content_endpoints() {
        let (transport, api) = api();
        transport.push_json(json!({
            "items": [{ "_id": "i1", "title": "Ops", "description": "", "url": "https://x", "metrics": "2x" }]
        }));
        transport.push_json(json!({
            "posts": [{ "_id": "b1", "title": "Hello", "content": "World" }]
        }));

        assert_eq!(api.portfolio().await.unwrap()[0].metrics, "2x");
        assert_eq!(api.blog().await.unwrap()[0].title, "Hello");

        let urls: Vec<String> = transport.requests().iter().map(|r| r.url().to_string()).collect();
        assert_eq!(
            urls,
            vec!["http://backend.test/api/portfolio", "http://backend.test/api/blog"]
        );
    }

    #[tokio::test]
    async fn test_checkout_status_error() {
        let (transport, api) = api();
        transport.push_status(500, "boom");

        let request = CheckoutRequest::from_cart(&Cart::new(), None);
        let err = api.checkout(&request).await.unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::Status);
    }

    #[tokio::test]
    async fn test_checkout_malformed_body() {
        let (transport, api) = api();
        transport.push_status(200, "not json");

        let request = CheckoutRequest::from_cart(&Cart::new(), None);
        let err = api.checkout(&request).await.unwrap_err();
        assert_eq!(err.kind(), crate::FailureKind::Malformed);
    }
}
