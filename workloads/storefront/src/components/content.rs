//! Backend-driven content sections.
//!
//! Each section loads once on mount. A failed load renders the section's
//! empty state rather than an error.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shop_commerce::content::{BlogPost, PortfolioItem, Testimonial};
use shop_data::FetchError;

use crate::state::StoreState;

/// Spawn a one-shot load into a fresh signal.
fn load_into<V, F>(what: &'static str, fetch: F) -> RwSignal<Vec<V>>
where
    V: Send + Sync + 'static,
    F: Future<Output = Result<Vec<V>, FetchError>> + 'static,
{
    let items = RwSignal::new(Vec::new());
    spawn_local(async move {
        match fetch.await {
            Ok(loaded) => items.set(loaded),
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind().as_str(), "failed to load {}", what);
            }
        }
    });
    items
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let api = expect_context::<StoreState>().api();
    let items = load_into("testimonials", async move { api.testimonials().await });

    view! {
        <section id="testimonials">
            <h2>"Testimonials"</h2>
            <div class="grid">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|t: Testimonial| {
                            let attribution = t.attribution();
                            view! {
                                <figure class="card">
                                    <blockquote>"“" {t.quote} "”"</blockquote>
                                    <figcaption>"— " {attribution}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || items.with(Vec::is_empty)>
                    <p class="status">"Add testimonials via database to showcase proof."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let api = expect_context::<StoreState>().api();
    let items = load_into("portfolio", async move { api.portfolio().await });

    view! {
        <section id="portfolio">
            <h2>"Portfolio"</h2>
            <div class="grid">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|p: PortfolioItem| {
                            view! {
                                <a class="card" href=p.url target="_blank" rel="noreferrer">
                                    <div class="title">{p.title}</div>
                                    <div class="description">{p.description}</div>
                                    <div class="metrics">{p.metrics}</div>
                                </a>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || items.with(Vec::is_empty)>
                    <p class="status">"Add portfolio items in the database to populate this section."</p>
                </Show>
            </div>
        </section>
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    let api = expect_context::<StoreState>().api();
    let posts = load_into("blog", async move { api.blog().await });

    view! {
        <section id="blog">
            <h2>"News"</h2>
            <div class="grid">
                {move || {
                    posts
                        .get()
                        .into_iter()
                        .map(|p: BlogPost| {
                            let href = p.href().to_string();
                            view! {
                                <article class="card">
                                    <h3>{p.title}</h3>
                                    <p class="excerpt">{p.content}</p>
                                    <a href=href>"Read"</a>
                                </article>
                            }
                        })
                        .collect_view()
                }}
                <Show when=move || posts.with(Vec::is_empty)>
                    <p class="status">"No posts yet."</p>
                </Show>
            </div>
        </section>
    }
}
