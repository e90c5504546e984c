use dioxus::prelude::*;

#[component]
pub fn Metrics() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { "Metrics" }
            }
            div { class: "page-content",
                p { "Query throughput, memory usage and merge activity of the server." }
            }
        }
    }
}
