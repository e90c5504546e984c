use dioxus::prelude::*;

use crate::store::use_app_state;

#[component]
pub fn Home() -> Element {
    let state = use_app_state();
    let version = state.read().version.clone();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Home" }
            }
            div { class: "page-content",
                if version.is_empty() {
                    p { "Waiting for the ClickHouse server..." }
                } else {
                    p { "Connected to ClickHouse {version}." }
                }
            }
        }
    }
}
