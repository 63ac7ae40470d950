//! Slide-out cart with quantity controls and checkout.

use leptos::prelude::*;
use shop_commerce::cart::{CartLine, CartStore};

use crate::state::StoreState;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let state = expect_context::<StoreState>();
    let is_open = move || state.cart.with(CartStore::is_open);
    let close = move |_: leptos::ev::MouseEvent| state.cart.update(CartStore::close);
    let submitting = move || state.checkout.with(|c| c.is_submitting());

    view! {
        <Show when=is_open>
            <div class="drawer-backdrop" aria-hidden="true" on:click=close></div>
            <aside class="cart-drawer" aria-label="Cart">
                <div class="drawer-header">
                    <h3>"Your Cart"</h3>
                    <button aria-label="Close cart" on:click=close>"✕"</button>
                </div>
                <div class="drawer-lines">
                    <Show when=move || state.cart.with(|s| s.cart().is_empty())>
                        <p class="status">"Your cart is empty."</p>
                    </Show>
                    {move || {
                        state
                            .cart
                            .with(|s| s.cart().lines().to_vec())
                            .into_iter()
                            .map(|line| view! { <CartLineRow line=line/> })
                            .collect_view()
                    }}
                </div>
                <div class="drawer-footer">
                    <div class="subtotal">
                        <span>"Subtotal"</span>
                        <span>{move || state.cart.with(|s| s.subtotal().display())}</span>
                    </div>
                    <button
                        class="btn checkout"
                        disabled=move || !state.can_checkout()
                        on:click=move |_| state.checkout()
                    >
                        {move || if submitting() { "Processing..." } else { "Checkout" }}
                    </button>
                </div>
            </aside>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let state = expect_context::<StoreState>();
    let quantity = i64::from(line.quantity());
    let decrement_id = line.product_id.clone();
    let increment_id = line.product_id.clone();

    view! {
        <div class="cart-line">
            <div>
                <div class="title">{line.title.clone()}</div>
                <div class="unit-price">{line.unit_price.display()}</div>
            </div>
            <div class="quantity">
                <button
                    aria-label="Decrease quantity"
                    on:click=move |_| state.set_quantity(&decrement_id, quantity - 1)
                >
                    "-"
                </button>
                <span>{quantity}</span>
                <button
                    aria-label="Increase quantity"
                    on:click=move |_| state.set_quantity(&increment_id, quantity + 1)
                >
                    "+"
                </button>
            </div>
        </div>
    }
}
