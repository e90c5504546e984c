use dioxus::prelude::*;

use super::expansion::Expansion;
use super::view::{NavLinkView, SidebarView};
use crate::store::use_app_state;
use crate::widgets::icons::{Icon, IconKind};
use crate::widgets::server_status::ServerStatus;

#[component]
pub fn Sidebar() -> Element {
    let state = use_app_state();
    let route = use_route::<crate::Route>();
    let current_path = route.to_string();
    let mut expansion = use_signal(Expansion::default);

    let layout = expansion();
    let Some(view) = SidebarView::build(&state.read(), layout, &current_path) else {
        return rsx! {};
    };
    let expanded = layout.is_expanded();

    rsx! {
        aside { class: view.container_class,
            div { class: "sidebar-header",
                Link { to: crate::Route::Home {}, class: "sidebar-brand",
                    img { src: crate::LOGO_SVG, alt: "Logo", class: "logo" }
                    if view.show_brand_text {
                        span { class: "brand-text", "Analytics." }
                    }
                }
                if expanded {
                    button {
                        class: "sidebar-toggle",
                        r#type: "button",
                        title: "Collapse sidebar",
                        onclick: move |_| expansion.set(layout.toggled()),
                        Icon { kind: IconKind::ChevronLeft }
                    }
                }
            }
            nav { class: "sidebar-nav",
                for link in view.links.iter().copied() {
                    NavLink { key: "{link.entry.path}", link }
                }
            }
            div { class: "sidebar-footer",
                ServerStatus { expanded: view.show_status_label }
            }
            if !expanded {
                button {
                    class: "sidebar-toggle expand",
                    r#type: "button",
                    title: "Expand sidebar",
                    onclick: move |_| expansion.set(layout.toggled()),
                    Icon { kind: IconKind::ChevronRight }
                }
            }
        }
    }
}

#[component]
fn NavLink(link: NavLinkView) -> Element {
    let class = link.class;

    rsx! {
        Link {
            to: link.entry.path,
            new_tab: link.entry.new_window,
            class: "{class}",
            span { class: "nav-icon",
                Icon { kind: link.entry.icon, class: link.icon_class }
                if link.entry.badge {
                    span { class: "nav-badge" }
                }
            }
            if let Some(label) = link.label {
                span { class: "nav-label", "{label}" }
            }
        }
    }
}
