use api_client::ApiClient;
use dioxus::prelude::*;

mod actions;
mod auth;
mod config;
mod format_helpers;
mod routes;
mod storage;
use auth::AuthState;
use config::CONFIG;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(config::log_level(&CONFIG)) {
        eprintln!("[kronotrack] logger already initialised: {e}");
    }
    tracing::info!(api = %CONFIG.api.base_url, platform = client_platform(), "starting dashboard");

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(|| ApiClient::from_config(&CONFIG.api));
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
