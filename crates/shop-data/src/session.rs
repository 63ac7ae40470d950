//! Host-agnostic driver for the storefront page state.

use crate::{ApiConfig, FetchError, StorefrontApi, Transport};
use shop_commerce::cart::CartStore;
use shop_commerce::catalog::{Category, Product};
use shop_commerce::checkout::{CheckoutOutcome, CheckoutSubmitter};
use shop_commerce::content::{BlogPost, PortfolioItem, Testimonial};
use shop_commerce::ids::ProductId;
use shop_commerce::search::CatalogQuery;
use shop_commerce::CommerceError;

/// Owns the API client and every piece of page state.
///
/// Catalog and content loads swallow failures into empty lists (and log
/// them); only checkout reports failure to the caller.
pub struct StorefrontSession<T> {
    api: StorefrontApi<T>,
    config: ApiConfig,
    cart: CartStore,
    catalog: CatalogQuery,
    checkout: CheckoutSubmitter,
    categories: Vec<Category>,
    testimonials: Vec<Testimonial>,
    portfolio: Vec<PortfolioItem>,
    posts: Vec<BlogPost>,
}

impl<T: Transport> StorefrontSession<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            api: StorefrontApi::new(transport, &config),
            config,
            cart: CartStore::new(),
            catalog: CatalogQuery::new(),
            checkout: CheckoutSubmitter::new(),
            categories: Vec::new(),
            testimonials: Vec::new(),
            portfolio: Vec::new(),
            posts: Vec::new(),
        }
    }

    pub fn api(&self) -> &StorefrontApi<T> {
        &self.api
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn catalog(&self) -> &CatalogQuery {
        &self.catalog
    }

    pub fn checkout_state(&self) -> &CheckoutSubmitter {
        &self.checkout
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.portfolio
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Add one unit of `product` and open the cart drawer.
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add_item(product);
    }

    /// Set a line's quantity (clamped to at least 1).
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Change the search text; returns true if a refresh is needed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        self.catalog.set_query(query)
    }

    /// Change the category filter; returns true if a refresh is needed.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        self.catalog.set_category(category)
    }

    /// Issue a search for the current filters and apply the result.
    ///
    /// Returns false if the response was superseded before it arrived.
    pub async fn refresh_catalog(&mut self) -> bool {
        let ticket = self.catalog.issue(self.config.search_limit);
        let result = self.api.search_products(&ticket.request).await;
        let result = swallow("products", result);
        self.catalog.apply::<FetchError>(ticket.seq, Ok(result))
    }

    pub async fn load_categories(&mut self) -> &[Category] {
        self.categories = swallow("categories", self.api.categories().await);
        &self.categories
    }

    pub async fn load_testimonials(&mut self) -> &[Testimonial] {
        self.testimonials = swallow("testimonials", self.api.testimonials().await);
        &self.testimonials
    }

    pub async fn load_portfolio(&mut self) -> &[PortfolioItem] {
        self.portfolio = swallow("portfolio", self.api.portfolio().await);
        &self.portfolio
    }

    pub async fn load_blog(&mut self) -> &[BlogPost] {
        self.posts = swallow("blog", self.api.blog().await);
        &self.posts
    }

    /// Submit the cart as an order.
    ///
    /// Returns an error without sending anything if the cart is empty or a
    /// checkout is already outstanding. Otherwise returns the outcome: on
    /// confirmation the cart is cleared and the drawer closed; on failure
    /// the cart is left intact.
    pub async fn checkout(&mut self, email: Option<String>) -> Result<CheckoutOutcome, CommerceError> {
        let request = self.checkout.begin(self.cart.cart(), email)?;
        let result = self.api.checkout(&request).await;

        if let Err(e) = &result {
            tracing::warn!(error = %e, kind = e.kind().as_str(), "checkout failed");
        }

        let outcome = self.checkout.finish(result, self.cart.cart_mut())?;
        if let CheckoutOutcome::Confirmed { amount } = &outcome {
            tracing::info!(amount = %amount, lines = request.items.len(), "order confirmed");
            self.cart.close();
        }
        Ok(outcome)
    }
}

/// Degrade a failed load to an empty list.
fn swallow<V>(what: &'static str, result: Result<Vec<V>, FetchError>) -> Vec<V> {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, kind = e.kind().as_str(), "failed to load {}", what);
        Vec::new()
    })
}
