use serde::{Deserialize, Serialize};

use crate::core::utils::{APP_NAME, DATETIME_PATH, WEEK_NUMBER_PATH};

/// Query string accepted by the datetime and week-number endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TimezoneQuery {
    /// IANA timezone name (e.g., 'America/New_York'); the configured default when absent.
    /// Kept exactly as sent so errors echo the caller's input.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Current datetime payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatetimeResponse {
    /// ISO 8601 datetime with UTC offset
    pub datetime: String,
}

/// Current ISO week payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekNumberResponse {
    /// ISO 8601 week number (1..=53)
    pub week_number: u32,
}

/// Error payload returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Paths of the functional endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointPaths {
    pub datetime: String,
    pub week_number: String,
}

/// Static service metadata served at `/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    pub endpoints: EndpointPaths,
}

impl ServiceInfo {
    pub fn current() -> Self {
        Self {
            name: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "running".to_string(),
            endpoints: EndpointPaths {
                datetime: DATETIME_PATH.to_string(),
                week_number: WEEK_NUMBER_PATH.to_string(),
            },
        }
    }
}
