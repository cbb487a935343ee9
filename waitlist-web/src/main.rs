use dioxus::prelude::*;
use tracing::{error, info};
use waitlist_web::{App, WaitlistServices};

#[cfg(not(target_arch = "wasm32"))]
fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn configure_logging() {
    dioxus::logger::initialize_default();
}

fn main() {
    configure_logging();

    match WaitlistServices::load() {
        Ok(services) => {
            info!("Starting waitlist for {}", services.product_name);
            LaunchBuilder::new()
                .with_context_provider(move || Box::new(services.clone()))
                .launch(App);
        }
        Err(e) => {
            error!("Waitlist is not configured: {e}");
            LaunchBuilder::new().launch(App);
        }
    }
}
