//! Storefront page
//!
//! A single scrolling page, rendered client-side with Leptos:
//! - Catalog search with debounced queries and a category filter
//! - Slide-out cart drawer with quantity controls
//! - Checkout against the backend API
//! - Testimonials, portfolio and news sections loaded from the backend

mod app;
mod components;
mod state;
pub mod telemetry;

pub use app::App;
pub use state::StoreState;
