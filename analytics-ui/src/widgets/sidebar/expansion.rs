/// Width of the sidebar. Local to the sidebar; starts collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

impl Expansion {
    pub fn toggled(self) -> Self {
        match self {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        }
    }

    /// Labels and the brand text only render when expanded.
    pub fn is_expanded(self) -> bool {
        self == Expansion::Expanded
    }

    pub fn container_class(self) -> &'static str {
        match self {
            Expansion::Collapsed => "sidebar collapsed",
            Expansion::Expanded => "sidebar expanded",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Expansion::Collapsed => "nav-icon-svg",
            Expansion::Expanded => "nav-icon-svg with-label",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        assert_eq!(Expansion::default(), Expansion::Collapsed);
        assert!(!Expansion::default().is_expanded());
    }

    #[test]
    fn test_toggle_round_trip() {
        let expanded = Expansion::default().toggled();
        assert!(expanded.is_expanded());
        assert_eq!(expanded.toggled(), Expansion::Collapsed);
    }

    #[test]
    fn test_container_width_follows_expansion() {
        assert_eq!(Expansion::Collapsed.container_class(), "sidebar collapsed");
        assert_eq!(Expansion::Expanded.container_class(), "sidebar expanded");
    }
}
