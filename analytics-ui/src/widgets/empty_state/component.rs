use dioxus::prelude::*;

use crate::widgets::icons::{Icon, IconKind};

#[component]
pub fn EmptyState(
    icon: IconKind,
    title: String,
    description: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon",
                Icon { kind: icon, class: "icon-lg" }
            }
            h3 { class: "empty-title", "{title}" }
            p { class: "empty-description", "{description}" }
            div { class: "empty-action", {children} }
        }
    }
}
