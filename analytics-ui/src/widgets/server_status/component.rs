use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, use_toast};

use crate::api::ApiClient;
use crate::config::UI_VERSION;
use crate::store::{connect, use_app_state};
use crate::widgets::icons::Icon;
use crate::widgets::server_status::ConnectionStatus;

fn trigger_class(expanded: bool) -> &'static str {
    if expanded {
        "status-trigger expanded"
    } else {
        "status-trigger"
    }
}

/// Connection indicator with a detail panel that opens on click.
#[component]
pub fn ServerStatus(expanded: bool) -> Element {
    let state = use_app_state();
    let client = use_context::<ApiClient>();
    let toaster = use_toast();
    let mut open = use_signal(|| false);

    let snapshot = state.read().clone();
    let status = ConnectionStatus::from_state(&snapshot);

    rsx! {
        div { class: "server-status",
            button {
                class: trigger_class(expanded),
                r#type: "button",
                title: "Server status",
                onclick: move |_| open.set(!open()),
                Icon { kind: status.icon(), class: status.tone_class() }
                if expanded {
                    span { class: "status-label", "{status}" }
                }
            }
            if open() {
                div { class: "status-popover", role: "dialog",
                    p { class: "popover-title", "Server Status" }
                    p { class: "popover-line", "{status}" }
                    p { class: "popover-line", "ClickHouse Version: {snapshot.version}" }
                    p { class: "popover-line", "UI Version: {UI_VERSION}" }
                    button {
                        class: "status-reconnect",
                        r#type: "button",
                        disabled: status == ConnectionStatus::Connecting,
                        onclick: move |_| {
                            let client = client.clone();
                            spawn(async move {
                                if let Err(e) = connect(state, client).await {
                                    toaster
                                        .error(
                                            format!("Reconnect failed: {e}"),
                                            ToastOptions::new().permanent(false),
                                        );
                                }
                            });
                        },
                        "Reconnect"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_class_follows_expansion() {
        assert_eq!(trigger_class(false), "status-trigger");
        assert_eq!(trigger_class(true), "status-trigger expanded");
    }
}
