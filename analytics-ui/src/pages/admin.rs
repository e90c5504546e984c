use dioxus::prelude::*;

use crate::Route;
use crate::store::use_app_state;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::icons::IconKind;

#[component]
pub fn Admin() -> Element {
    let state = use_app_state();
    let is_admin = state.read().is_admin;

    if !is_admin {
        return rsx! {
            EmptyState {
                icon: IconKind::ShieldCheck,
                title: "Admin access required",
                description: "Your ClickHouse user has no ACCESS MANAGEMENT grant.",
                Link { to: Route::Home {}, class: "empty-link", "Back to home" }
            }
        };
    }

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Admin" }
            }
            div { class: "page-content",
                p { "Manage users, roles and quotas on the server." }
            }
        }
    }
}
