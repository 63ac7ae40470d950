//! Browser entry point (built with `trunk`).

fn main() {
    console_error_panic_hook::set_once();
    storefront::telemetry::init();
    leptos::mount::mount_to_body(storefront::App);
}
