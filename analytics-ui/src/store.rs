//! Shared application state.
//!
//! The store is a `Signal<AppState>` placed in context by the root component.
//! Only the connection task writes it; widgets read it through
//! [`use_app_state`].

use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError, ConnectionReport};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub is_server_available: bool,
    /// ClickHouse server version, empty until the first successful probe
    pub version: String,
    pub is_loading_credentials: bool,
    pub is_admin: bool,
}

impl AppState {
    /// Marks a connection attempt as in flight. Availability is kept so the
    /// status control can show a reconnect.
    pub fn begin_connect(&mut self) {
        self.is_loading_credentials = true;
    }

    pub fn apply(&mut self, result: &Result<ConnectionReport, ApiError>) {
        self.is_loading_credentials = false;
        match result {
            Ok(report) => {
                self.is_server_available = true;
                self.version = report.version.clone();
                self.is_admin = report.is_admin;
            }
            Err(_) => {
                self.is_server_available = false;
                self.version.clear();
                self.is_admin = false;
            }
        }
    }

    /// State after applying `result`, without touching `self`.
    pub fn applied(&self, result: &Result<ConnectionReport, ApiError>) -> Self {
        let mut next = self.clone();
        next.apply(result);
        next
    }
}

pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Probe the server and record the outcome in the store.
pub async fn connect(mut state: Signal<AppState>, client: ApiClient) -> Result<(), ApiError> {
    state.write().begin_connect();
    let result = client.probe().await;
    match &result {
        Ok(report) => info!(
            "Connected to ClickHouse {} as {} (admin: {})",
            report.version,
            client.config().username,
            report.is_admin
        ),
        Err(e) => warn!(
            "Connection to {} failed: {}",
            client.config().clickhouse_url,
            e
        ),
    }
    state.write().apply(&result);
    result.map(|_| ())
}

/// What the watcher should write after a background probe, if anything.
///
/// `None` while a connect is in flight, since that connect owns the loading
/// flag, and when the probe changed nothing.
pub fn next_state(
    current: &AppState,
    result: &Result<ConnectionReport, ApiError>,
) -> Option<AppState> {
    if current.is_loading_credentials {
        return None;
    }
    let next = current.applied(result);
    (next != *current).then_some(next)
}

#[cfg(target_arch = "wasm32")]
async fn sleep_secs(secs: u32) {
    gloo_timers::future::TimeoutFuture::new(secs.saturating_mul(1000)).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_secs(secs: u32) {
    tokio::time::sleep(std::time::Duration::from_secs(secs.into())).await;
}

/// Re-probe the server forever at the configured interval.
///
/// Returns immediately when the interval is `0`. The store is only written
/// when the probe changes something, so idle ticks do not re-render.
pub async fn watch_health(mut state: Signal<AppState>, client: ApiClient) {
    let interval_secs = client.config().health_interval_secs;
    if interval_secs == 0 {
        info!("Background health checks disabled");
        return;
    }

    loop {
        sleep_secs(interval_secs).await;
        if state.peek().is_loading_credentials {
            continue;
        }

        let result = client.probe().await;
        // A reconnect may have started while the probe was out.
        let Some(next) = next_state(&state.peek(), &result) else {
            continue;
        };
        if next.is_server_available {
            info!("ClickHouse server is reachable again");
        } else {
            warn!("Lost connection to ClickHouse server");
        }
        state.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(version: &str, is_admin: bool) -> Result<ConnectionReport, ApiError> {
        Ok(ConnectionReport {
            version: version.to_string(),
            is_admin,
        })
    }

    #[test]
    fn test_default_state_is_disconnected() {
        let state = AppState::default();
        assert!(!state.is_server_available);
        assert!(!state.is_loading_credentials);
        assert!(!state.is_admin);
        assert!(state.version.is_empty());
    }

    #[test]
    fn test_begin_connect_only_sets_loading() {
        let mut state = AppState::default();
        state.apply(&connected("24.3.1", true));
        let before = state.clone();

        state.begin_connect();
        assert!(state.is_loading_credentials);
        assert_eq!(state.is_server_available, before.is_server_available);
        assert_eq!(state.version, before.version);
        assert_eq!(state.is_admin, before.is_admin);
    }

    #[test]
    fn test_apply_success_records_report() {
        let mut state = AppState::default();
        state.begin_connect();
        state.apply(&connected("24.3.1", true));

        assert!(!state.is_loading_credentials);
        assert!(state.is_server_available);
        assert_eq!(state.version, "24.3.1");
        assert!(state.is_admin);
    }

    #[test]
    fn test_apply_failure_clears_server_details() {
        let mut state = AppState::default();
        state.apply(&connected("24.3.1", true));
        state.begin_connect();
        state.apply(&Err(ApiError::EmptyResult));

        assert!(!state.is_loading_credentials);
        assert!(!state.is_server_available);
        assert!(state.version.is_empty());
        assert!(!state.is_admin);
    }

    #[test]
    fn test_applied_leaves_original_untouched() {
        let state = AppState::default();
        let next = state.applied(&connected("23.8.2", false));
        assert_eq!(state, AppState::default());
        assert!(next.is_server_available);
        assert_ne!(state, next);
    }

    #[test]
    fn test_next_state_skips_while_reconnecting() {
        let mut current = AppState::default();
        current.apply(&connected("24.3.1", false));
        current.begin_connect();

        assert_eq!(next_state(&current, &Err(ApiError::EmptyResult)), None);
        assert_eq!(next_state(&current, &connected("24.3.2", true)), None);
        assert!(current.is_loading_credentials);
    }

    #[test]
    fn test_next_state_only_on_change() {
        let mut current = AppState::default();
        current.apply(&connected("24.3.1", false));

        assert_eq!(next_state(&current, &connected("24.3.1", false)), None);

        let lost = next_state(&current, &Err(ApiError::EmptyResult)).unwrap();
        assert!(!lost.is_server_available);
        assert!(!lost.is_loading_credentials);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_native_sleep_uses_tokio_timer() {
        tokio::time::timeout(std::time::Duration::from_secs(1), sleep_secs(0))
            .await
            .unwrap();
    }
}
