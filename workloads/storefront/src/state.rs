//! Page state shared by every view.
//!
//! One `StoreState` is created by [`App`](crate::App) and provided through
//! context. Views mutate it only through the methods here, which keep the
//! network round trips and the pure state containers in step.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_commerce::prelude::*;
use shop_data::{ApiConfig, FetchError, StorefrontApi};

#[cfg(target_arch = "wasm32")]
pub type PageTransport = shop_data::BrowserTransport;

#[cfg(not(target_arch = "wasm32"))]
pub type PageTransport = shop_data::HttpTransport;

pub type PageApi = StorefrontApi<PageTransport>;

#[derive(Clone, Copy)]
pub struct StoreState {
    pub cart: RwSignal<CartStore>,
    pub catalog: RwSignal<CatalogQuery>,
    pub checkout: RwSignal<CheckoutSubmitter>,
    pub categories: RwSignal<Vec<Category>>,
    debouncer: RwSignal<Debouncer>,
    api: StoredValue<PageApi>,
    search_limit: u32,
}

impl StoreState {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            cart: RwSignal::new(CartStore::new()),
            catalog: RwSignal::new(CatalogQuery::new()),
            checkout: RwSignal::new(CheckoutSubmitter::new()),
            categories: RwSignal::new(Vec::new()),
            debouncer: RwSignal::new(Debouncer::new(config.search_debounce_ms)),
            api: StoredValue::new(StorefrontApi::new(PageTransport::default(), config)),
            search_limit: config.search_limit,
        }
    }

    /// A clone of the backend client for use inside a spawned task.
    pub fn api(&self) -> PageApi {
        self.api.get_value()
    }

    pub fn add_to_cart(&self, product: &Product) {
        self.cart.update(|store| store.add_item(product));
    }

    pub fn set_quantity(&self, product_id: &ProductId, quantity: i64) {
        self.cart.update(|store| {
            store.set_quantity(product_id, quantity);
        });
    }

    pub fn set_query(&self, query: String) {
        if self.catalog.try_update(|c| c.set_query(query)).unwrap_or(false) {
            self.schedule_search();
        }
    }

    pub fn set_category(&self, category: String) {
        if self.catalog.try_update(|c| c.set_category(category)).unwrap_or(false) {
            self.schedule_search();
        }
    }

    /// Issue a search once input has been quiet for the debounce period.
    pub fn schedule_search(&self) {
        let Some(generation) = self.debouncer.try_update(Debouncer::schedule) else {
            return;
        };
        let delay = self.debouncer.with_untracked(Debouncer::delay);
        let this = *self;
        set_timeout(
            move || {
                if this.debouncer.with_untracked(|d| d.is_current(generation)) {
                    this.search_now();
                }
            },
            delay,
        );
    }

    /// Issue a search immediately, bypassing the debouncer.
    pub fn search_now(&self) {
        let limit = self.search_limit;
        let Some(ticket) = self.catalog.try_update(|c| c.issue(limit)) else {
            return;
        };
        let api = self.api();
        let catalog = self.catalog;
        spawn_local(async move {
            let result = api.search_products(&ticket.request).await;
            log_failure("products", &result);
            let applied = catalog
                .try_update(|c| c.apply(ticket.seq, result))
                .unwrap_or(false);
            if !applied {
                tracing::debug!(seq = ticket.seq, "discarded stale search response");
            }
        });
    }

    pub fn load_categories(&self) {
        let api = self.api();
        let categories = self.categories;
        spawn_local(async move {
            let result = api.categories().await;
            log_failure("categories", &result);
            categories.set(result.unwrap_or_default());
        });
    }

    pub fn can_checkout(&self) -> bool {
        self.cart
            .with(|store| self.checkout.with(|c| c.can_submit(store.cart())))
    }

    /// Submit the cart. Does nothing if the cart is empty or a checkout is
    /// already in flight.
    pub fn checkout(&self) {
        let begun = self.cart.with_untracked(|store| {
            self.checkout
                .try_update(|c| c.begin(store.cart(), None))
        });
        let request = match begun {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "checkout rejected");
                return;
            }
            None => return,
        };

        let this = *self;
        spawn_local(async move {
            let result = this.api().checkout(&request).await;
            log_failure("checkout", &result);

            let finished = this
                .cart
                .try_update(|store| {
                    this.checkout
                        .try_update(|c| c.finish(result, store.cart_mut()))
                })
                .flatten();

            match finished {
                Some(Ok(outcome)) => {
                    if outcome.is_confirmed() {
                        this.cart.update(CartStore::close);
                    }
                    notify(&outcome.notice());
                }
                Some(Err(e)) => tracing::warn!(error = %e, "checkout completion out of order"),
                None => {}
            }
        });
    }
}

fn log_failure<V>(what: &'static str, result: &Result<V, FetchError>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, kind = e.kind().as_str(), "{} request failed", what);
    }
}

/// Show a blocking notice.
fn notify(message: &str) {
    if window().alert_with_message(message).is_err() {
        tracing::warn!(notice = message, "could not show notice");
    }
}
