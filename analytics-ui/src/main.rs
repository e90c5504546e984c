use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, ToastProvider, use_toast};

mod api;
mod config;
mod pages;
mod store;
mod widgets;

use crate::api::ApiClient;
use crate::store::{AppState, connect, use_app_state, watch_health};
use pages::{Admin, Home, Metrics, NotFound};
use widgets::sidebar::Sidebar;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/metrics")]
        Metrics {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const LOGO_SVG: Asset = asset!("/assets/logo.svg");

fn main() {
    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::new);
    use_context_provider(|| Signal::new(AppState::default()));

    rsx! {
        document::Link { rel: "icon", href: LOGO_SVG }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider { Router::<Route> {} }
    }
}

/// Sidebar next to the routed page. Owns the connection task.
#[component]
fn AppShell() -> Element {
    let state = use_app_state();
    let client = use_context::<ApiClient>();
    let toaster = use_toast();

    use_future(move || {
        let client = client.clone();
        async move {
            if let Err(e) = connect(state, client.clone()).await {
                toaster.error(
                    format!("Unable to reach ClickHouse: {e}"),
                    ToastOptions::new()
                        .duration(Duration::from_secs(10))
                        .permanent(false),
                );
            }
            watch_health(state, client).await;
        }
    });

    rsx! {
        div { class: "app-shell",
            Sidebar {}
            main { class: "app-content", Outlet::<Route> {} }
        }
    }
}
