use crate::api::ApiError;
use crate::config::Config;
use dioxus::prelude::{info, warn};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_http::api::{
    ADMIN_GRANTS_QUERY, AdminRow, JsonResult, QueryParams, SERVER_VERSION_QUERY, VersionRow,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

/// What a successful probe learned about the server and the current user.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionReport {
    pub version: String,
    pub is_admin: bool,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ApiClient {
    pub async fn ping(&self) -> Result<(), ApiError> {
        let url = format!("{}/ping", self.config.clickhouse_url);
        info!("Checking health at URL: {}", url);
        let response = self.client.get(&url).send().await?;
        read_success(response).await.map(|_| ())
    }

    pub async fn server_version(&self) -> Result<String, ApiError> {
        let row: VersionRow = self.query_first(SERVER_VERSION_QUERY).await?;
        Ok(row.version)
    }

    pub async fn is_admin(&self) -> Result<bool, ApiError> {
        let row: AdminRow = self.query_first(ADMIN_GRANTS_QUERY).await?;
        Ok(row.granted())
    }

    /// Ping, then fetch the version and the admin flag for the configured user.
    pub async fn probe(&self) -> Result<ConnectionReport, ApiError> {
        self.ping().await?;
        let version = self.server_version().await?;
        // Users without access to system.grants are simply not admins.
        let is_admin = self.is_admin().await.unwrap_or_else(|e| {
            warn!("Admin check failed for user {}: {}", self.config.username, e);
            false
        });
        Ok(ConnectionReport { version, is_admin })
    }

    async fn query_first<T: DeserializeOwned>(&self, sql: &str) -> Result<T, ApiError> {
        let url = format!("{}/", self.config.clickhouse_url);
        let response = self
            .client
            .get(&url)
            .query(&QueryParams::json(sql))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await?;
        let body = read_success(response).await?;
        decode_first(&body)
    }
}

async fn read_success(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if status == StatusCode::OK {
        Ok(body)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }
}

fn decode_first<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let result: JsonResult<T> = serde_json::from_str(body)?;
    result.into_first().ok_or(ApiError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_first_row() {
        let body = r#"{"meta":[{"name":"version","type":"String"}],"data":[{"version":"23.12.1.1"}],"rows":1}"#;
        let row: VersionRow = decode_first(body).unwrap();
        assert_eq!(row.version, "23.12.1.1");
    }

    #[test]
    fn test_decode_first_empty() {
        let result = decode_first::<VersionRow>(r#"{"data":[],"rows":0}"#);
        assert!(matches!(result, Err(ApiError::EmptyResult)));
    }

    #[test]
    fn test_decode_first_garbage() {
        // ClickHouse answers errors as plain text
        let result = decode_first::<AdminRow>("Code: 497. DB::Exception: Not enough privileges");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_client_keeps_config() {
        let config = Config::from_lookup(|key| {
            (key == "CLICKHOUSE_URL").then(|| "http://clickhouse:8123".to_string())
        });
        let client = ApiClient::with_config(config.clone());
        assert_eq!(client.config(), &config);
    }
}
