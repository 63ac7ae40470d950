//! Navigation and static page sections.

use leptos::prelude::*;
use shop_commerce::cart::CartStore;

use crate::app::STORE_NAME;
use crate::state::StoreState;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#shop", "Shop"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#blog", "Blog"),
    ("#contact", "Contact"),
];

const SERVICES: [(&str, &str); 3] = [
    ("Agent Integrations", "Custom AI agent workflows that plug into your stack."),
    ("Dashboards", "Operational dashboards for LLM metrics and performance."),
    ("Fintech-grade Security", "Compliance-first architecture and reviews."),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<StoreState>();
    let menu_open = RwSignal::new(false);
    let item_count = move || state.cart.with(|store| store.cart().item_count());

    view! {
        <header class="navbar">
            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="brand">{STORE_NAME}</div>
            <nav class="nav-links">
                {NAV_LINKS.iter().map(|(href, label)| view! { <a href=*href>{*label}</a> }).collect_view()}
            </nav>
            <button class="cart-button" on:click=move |_| state.cart.update(CartStore::open)>
                "Cart"
                <Show when=move || item_count() != 0>
                    <span class="badge">{item_count}</span>
                </Show>
            </button>
        </header>
        <Show when=move || menu_open.get()>
            <nav class="mobile-menu">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a href=*href on:click=move |_| menu_open.set(false)>{*label}</a>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" aria-label="Hero">
            <h1>"Build and buy AI products with confidence"</h1>
            <p>
                "A premium, technical-first shop for AI agents, dashboards, and integrations."
            </p>
            <div class="hero-actions">
                <a href="#shop" class="btn">"Explore Products"</a>
                <a href="#contact" class="btn secondary">"Talk to sales"</a>
            </div>
            <ul class="hero-points">
                <li>"Secure checkout"</li>
                <li>"Major payments"</li>
            </ul>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services">
            <h2>"Services"</h2>
            <div class="grid">
                {SERVICES
                    .iter()
                    .map(|(title, desc)| {
                        view! {
                            <div class="card">
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about">
            <h2>"About"</h2>
            <p>
                "We build AI-native commerce experiences with precision and clarity, "
                "from agent architectures to operational dashboards."
            </p>
            <ul>
                <li>"WCAG AA accessible"</li>
                <li>"Performance-optimized"</li>
                <li>"SEO ready"</li>
            </ul>
        </section>
    }
}

/// Contact details and an inert enquiry form.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact">
            <h2>"Contact"</h2>
            <p>"Have a project in mind? Let's build it."</p>
            <div class="contact-details">
                <div>"Email: hello@example.com"</div>
                <div>"Twitter: @aishop"</div>
            </div>
            <form class="card" on:submit=|ev| ev.prevent_default()>
                <label>"Name" <input placeholder="Your name"/></label>
                <label>"Email" <input type="email" placeholder="you@company.com"/></label>
                <label>"Message" <textarea rows="4" placeholder="Tell us about your needs"></textarea></label>
                <button type="button" class="btn">"Send"</button>
            </form>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"© " {STORE_NAME}</p>
        </footer>
    }
}
