use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{DatetimeResponse, ErrorBody, WeekNumberResponse};

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Empty or blank timezones are sent as UTC
pub fn normalize_timezone(timezone: &str) -> &str {
    match timezone.trim() {
        "" => DEFAULT_TIMEZONE,
        trimmed => trimmed,
    }
}

/// Build a reqwest client bounded by `timeout`
pub fn build_client(timeout: Duration) -> ClientResult<Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Unexpected {
            message: e.to_string(),
        })
}

/// Thin client for the `/api/v1` endpoints; no retries
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_root: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url().trim_end_matches('/').to_string();
        let api_root = Url::parse(&format!("{}/api/v1/", base_url)).map_err(|e| {
            ClientError::Unexpected {
                message: format!("Invalid API URL {}: {}", base_url, e),
            }
        })?;

        Ok(Self {
            client: build_client(*config.timeout())?,
            base_url,
            api_root,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn datetime(&self, timezone: &str) -> ClientResult<String> {
        let response: DatetimeResponse = self.get("datetime", timezone).await?;
        Ok(response.datetime)
    }

    pub async fn week_number(&self, timezone: &str) -> ClientResult<u32> {
        let response: WeekNumberResponse = self.get("week-number", timezone).await?;
        Ok(response.week_number)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, timezone: &str) -> ClientResult<T> {
        let url = self
            .api_root
            .join(endpoint)
            .map_err(|e| ClientError::Unexpected {
                message: e.to_string(),
            })?;
        let timezone = normalize_timezone(timezone);
        tracing::debug!("GET {} (timezone: {})", url, timezone);

        let response = self
            .client
            .get(url)
            .query(&[("timezone", timezone)])
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, &self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => format!("{}: {}", status, body.detail),
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Http { message });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::from_transport(e, &self.base_url))
    }
}
