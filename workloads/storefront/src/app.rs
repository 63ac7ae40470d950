//! Root component and page layout.

use leptos::prelude::*;
use leptos_meta::*;
use shop_commerce::seo::StoreSchema;
use shop_data::ApiConfig;

use crate::components::{
    About, Blog, CartDrawer, Contact, Footer, Hero, Navbar, Portfolio, Services, Shop,
    Testimonials,
};
use crate::state::StoreState;

pub const STORE_NAME: &str = "AI Webshop";
pub const STORE_TWITTER: &str = "https://twitter.com/aishop";

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid storefront configuration, using defaults");
        ApiConfig::default()
    });
    tracing::info!(backend = %config.base_url, "storefront starting");

    let state = StoreState::new(&config);
    provide_context(state);

    view! {
        <Title text=STORE_NAME/>
        <Meta name="description" content="A technical-first shop for AI agents, dashboards, and integrations"/>
        <StructuredData/>

        <a href="#shop" class="skip-link">"Skip to content"</a>
        <Navbar/>
        <main>
            <Hero/>
            <Shop/>
            <Services/>
            <About/>
            <Testimonials/>
            <Portfolio/>
            <Blog/>
            <Contact/>
        </main>
        <Footer/>
        <CartDrawer/>
    }
}

/// JSON-LD `Store` record for search engines.
#[component]
fn StructuredData() -> impl IntoView {
    let origin = window().location().origin().unwrap_or_default();
    let schema = StoreSchema::new(STORE_NAME, origin).with_same_as(STORE_TWITTER);

    match schema.to_json_ld() {
        Ok(json) => Some(view! { <Script type_="application/ld+json">{json}</Script> }),
        Err(e) => {
            tracing::warn!(error = %e, "could not encode structured data");
            None
        }
    }
}
