//! What the sidebar draws for a given store snapshot, route and width.

use super::expansion::Expansion;
use super::nav::{NavEntry, is_active, nav_item_class, visible_entries};
use crate::store::AppState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLinkView {
    pub entry: NavEntry,
    pub class: &'static str,
    pub icon_class: &'static str,
    /// `None` while collapsed, only the icon shows
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarView {
    pub container_class: &'static str,
    pub show_brand_text: bool,
    pub show_status_label: bool,
    pub links: Vec<NavLinkView>,
}

/// The sidebar disappears entirely while the server is unreachable.
pub fn is_visible(state: &AppState) -> bool {
    state.is_server_available
}

impl SidebarView {
    pub fn build(state: &AppState, expansion: Expansion, current_path: &str) -> Option<Self> {
        if !is_visible(state) {
            return None;
        }

        let expanded = expansion.is_expanded();
        let links = visible_entries(state.is_admin)
            .into_iter()
            .map(|entry| NavLinkView {
                entry,
                class: nav_item_class(is_active(current_path, entry.path)),
                icon_class: expansion.icon_class(),
                label: expanded.then_some(entry.label),
            })
            .collect();

        Some(Self {
            container_class: expansion.container_class(),
            show_brand_text: expanded,
            show_status_label: expanded,
            links,
        })
    }
}
