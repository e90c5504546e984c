use dioxus::prelude::*;

use crate::Route;
use crate::widgets::empty_state::EmptyState;
use crate::widgets::icons::IconKind;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        EmptyState {
            icon: IconKind::AlertCircle,
            title: "Page not found",
            description: "Nothing lives at {path}.",
            Link { to: Route::Home {}, class: "empty-link", "Back to home" }
        }
    }
}
