//! Log subscriber setup.
//!
//! Browser builds write formatted events to the devtools console; native
//! builds (tests, local runs) write to stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset or unparsable at build time.
pub const DEFAULT_DIRECTIVES: &str = "storefront=info,shop_data=info,shop_commerce=info";

/// Build the event filter from an optional directive string.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. Call once, before mounting the app.
#[cfg(target_arch = "wasm32")]
pub fn init() {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(log_filter(option_env!("RUST_LOG")))
        .with(console)
        .init();
}

/// Install the global subscriber. Call once, before mounting the app.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
