use crate::widgets::icons::IconKind;

/// A link shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
    pub new_window: bool,
    /// Draws the role badge over the icon
    pub badge: bool,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        path: "/",
        label: "Home",
        icon: IconKind::SquareTerminal,
        new_window: false,
        badge: false,
    },
    NavEntry {
        path: "/metrics",
        label: "Metrics",
        icon: IconKind::LineChart,
        new_window: false,
        badge: false,
    },
];

pub const ADMIN_ENTRY: NavEntry = NavEntry {
    path: "/admin",
    label: "Admin",
    icon: IconKind::ShieldCheck,
    new_window: false,
    badge: true,
};

/// Static entries, followed by the admin entry when the user holds the role.
pub fn visible_entries(is_admin: bool) -> Vec<NavEntry> {
    let mut entries = NAV_ENTRIES.to_vec();
    if is_admin {
        entries.push(ADMIN_ENTRY);
    }
    entries
}

/// Exact match; `/metrics` does not light up `/`.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
}

pub fn nav_item_class(active: bool) -> &'static str {
    if active { "nav-item active" } else { "nav-item" }
}
