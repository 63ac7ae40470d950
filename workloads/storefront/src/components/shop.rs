//! Catalog search, category filter and product grid.

use leptos::prelude::*;
use shop_commerce::catalog::Product;

use crate::state::StoreState;

#[component]
pub fn Shop() -> impl IntoView {
    let state = expect_context::<StoreState>();

    // Initial load runs immediately; later edits go through the debouncer.
    state.load_categories();
    state.search_now();

    let pending = move || state.catalog.with(|c| c.is_pending());
    let no_results = move || state.catalog.with(|c| !c.is_pending() && c.results().is_empty());

    view! {
        <section id="shop">
            <h2>"Shop"</h2>
            <div class="filters">
                <input
                    type="search"
                    aria-label="Search products"
                    placeholder="Search agents, dashboards, integrations"
                    prop:value=move || state.catalog.with(|c| c.query().to_string())
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                />
                <select
                    aria-label="Filter by category"
                    on:change=move |ev| state.set_category(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {move || {
                        state
                            .categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.slug>{c.title}</option> })
                            .collect_view()
                    }}
                </select>
            </div>

            <Show when=pending>
                <p class="status">"Loading products..."</p>
            </Show>
            <Show when=no_results>
                <p class="status">"No products found."</p>
            </Show>
            <div class="grid">
                {move || {
                    state
                        .catalog
                        .with(|c| c.results().to_vec())
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let state = expect_context::<StoreState>();
    let price = product.price_display();
    let title = product.title.clone();
    let description = product.description.clone();

    view! {
        <article class="card product-card">
            <h3>{title}</h3>
            <p class="description">{description}</p>
            <div class="product-footer">
                <span class="price">{price}</span>
                <button class="btn" on:click=move |_| state.add_to_cart(&product)>
                    "Add to cart"
                </button>
            </div>
        </article>
    }
}
