#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub clickhouse_url: String,
    pub username: String,
    pub password: String,
    /// Seconds between background health probes, `0` disables them
    pub health_interval_secs: u32,
}

const DEFAULT_CLICKHOUSE_URL: &str = "http://localhost:8123";
const DEFAULT_USERNAME: &str = "default";
const DEFAULT_HEALTH_INTERVAL_SECS: u32 = 30;

/// Version of this UI, shown in the server status panel.
pub const UI_VERSION: &str = env!("CARGO_PKG_VERSION");

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let clickhouse_url = lookup("CLICKHOUSE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_CLICKHOUSE_URL.to_string());

        let health_interval_secs = lookup("ANALYTICS_HEALTH_INTERVAL_SECS")
            .and_then(|secs| secs.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_HEALTH_INTERVAL_SECS);

        Self {
            clickhouse_url,
            username: lookup("CLICKHOUSE_USER").unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: lookup("CLICKHOUSE_PASSWORD").unwrap_or_default(),
            health_interval_secs,
        }
    }
}
