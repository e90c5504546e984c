//! Inline SVG icons in the lucide stroke style.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    SquareTerminal,
    LineChart,
    ShieldCheck,
    ChevronLeft,
    ChevronRight,
    Loader,
    CircleCheck,
    AlertCircle,
}

impl IconKind {
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::SquareTerminal => &[
                "m7 11 2-2-2-2",
                "M11 13h4",
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            ],
            IconKind::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            IconKind::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
                "m9 12 2 2 4-4",
            ],
            IconKind::ChevronLeft => &["m15 18-6-6 6-6"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::Loader => &["M21 12a9 9 0 1 1-6.219-8.56"],
            IconKind::CircleCheck => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "m9 12 2 2 4-4",
            ],
            IconKind::AlertCircle => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 8v4",
                "M12 16h.01",
            ],
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default, into)] class: String) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}
