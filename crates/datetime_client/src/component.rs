use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http_client::{ApiClient, DEFAULT_TIMEZONE, normalize_timezone};
use crate::models::{ComponentInfo, Data, DataFrame, InputSpec, Message, OutputSpec};

/// Workflow component calling the DateTime Tools API
///
/// Every output method returns a value in the host's shape; failures are
/// embedded as `Error: ...` text or an `error` column, never returned as `Err`.
///
/// The HTTP client is built once and shared by every output (and by clones).
/// A build failure is kept and reported by each output call instead.
#[derive(Debug, Clone)]
pub struct DateTimeApiComponent {
    api: Result<ApiClient, ClientError>,
    timezone: String,
}

impl DateTimeApiComponent {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: ApiClient::new(&config),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.set_timezone(timezone);
        self
    }

    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.timezone = timezone.into();
    }

    /// Timezone as entered by the user
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Timezone actually sent to the API
    pub fn resolved_timezone(&self) -> &str {
        normalize_timezone(&self.timezone)
    }

    pub fn info() -> ComponentInfo {
        ComponentInfo {
            name: "DateTimeAPI",
            display_name: "DateTime API",
            description: "Get current datetime and week number with timezone support.",
            icon: "datetime",
            inputs: vec![InputSpec {
                name: "timezone",
                display_name: "Timezone",
                value: DEFAULT_TIMEZONE,
                placeholder: "Enter timezone (e.g., UTC, America/New_York)",
                tool_mode: true,
            }],
            outputs: vec![
                OutputSpec {
                    name: "datetime",
                    display_name: "DateTime",
                    method: "get_datetime",
                },
                OutputSpec {
                    name: "week_number",
                    display_name: "Week Number",
                    method: "get_week_number",
                },
                OutputSpec {
                    name: "dataframe",
                    display_name: "DataFrame",
                    method: "as_dataframe",
                },
            ],
        }
    }

    /// Current datetime in ISO 8601, as a single text record
    pub async fn get_datetime(&self) -> Vec<Data> {
        let text = match self.fetch_datetime().await {
            Ok(datetime) => datetime,
            Err(e) => error_text(&e),
        };
        vec![Data { text }]
    }

    /// Current ISO week number, as text
    pub async fn get_week_number(&self) -> Message {
        let text = match self.fetch_week_number().await {
            Ok(week_number) => week_number.to_string(),
            Err(e) => error_text(&e),
        };
        Message { text }
    }

    /// Both values plus the resolved timezone in one row, or a single `error` column
    pub async fn as_dataframe(&self) -> DataFrame {
        let api = match self.api() {
            Ok(api) => api,
            Err(e) => return error_frame(&e),
        };
        let timezone = self.resolved_timezone();

        let (datetime, week_number) = tokio::join!(api.datetime(timezone), api.week_number(timezone));

        match (datetime, week_number) {
            (Ok(datetime), Ok(week_number)) => DataFrame::single_row([
                ("datetime", Value::from(datetime)),
                ("week_number", Value::from(week_number)),
                ("timezone", Value::from(timezone)),
            ]),
            (Err(e), _) | (_, Err(e)) => error_frame(&e),
        }
    }

    async fn fetch_datetime(&self) -> ClientResult<String> {
        self.api()?.datetime(self.resolved_timezone()).await
    }

    async fn fetch_week_number(&self) -> ClientResult<u32> {
        self.api()?.week_number(self.resolved_timezone()).await
    }

    fn api(&self) -> ClientResult<&ApiClient> {
        self.api.as_ref().map_err(Clone::clone)
    }
}

impl Default for DateTimeApiComponent {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

fn error_text(err: &ClientError) -> String {
    tracing::warn!("DateTime API request failed: {}", err);
    format!("Error: {}", err)
}

fn error_frame(err: &ClientError) -> DataFrame {
    tracing::warn!("DateTime API request failed: {}", err);
    DataFrame::single_row([("error", Value::from(err.to_string()))])
}
