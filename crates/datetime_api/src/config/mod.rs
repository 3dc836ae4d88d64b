use std::collections::HashMap;

use crate::core::utils::{DEFAULT_TIMEZONE, resolve_timezone};
use crate::errors::{DateTimeApiError, DateTimeApiResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8005;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration, built once at startup and handed to the router
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    /// Timezone used when a request omits `timezone`
    pub timezone: String,
    /// Enables the `X-API-Key` guard on the `/api/v1` routes when set
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            api_key: None,
        }
    }
}

impl Config {
    /// Build configuration from a flat key/value map; keys are case-sensitive
    pub fn from_map<I, K, V>(vars: I) -> DateTimeApiResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let value = |key: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        let port = match value("PORT") {
            Some(raw) => parse_port(raw)?,
            None => defaults.port,
        };
        let debug = match value("DEBUG") {
            Some(raw) => parse_flag("DEBUG", raw)?,
            None => defaults.debug,
        };

        let config = Self {
            host: value("HOST").map_or(defaults.host, str::to_string),
            port,
            debug,
            log_level: value("LOG_LEVEL").map_or(defaults.log_level, normalize_log_level),
            timezone: value("TIMEZONE").map_or(defaults.timezone, str::to_string),
            api_key: value("API_KEY").map(str::to_string),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DateTimeApiResult<()> {
        match resolve_timezone(&self.timezone) {
            Some(_) => Ok(()),
            None => Err(DateTimeApiError::InvalidDefaultTimezone {
                timezone: self.timezone.clone(),
            }),
        }
    }

    /// Copy safe to log: the API key is masked
    pub fn redacted(&self) -> Self {
        Self {
            api_key: self.api_key.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }

    /// Address handed to the TCP listener
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }

    /// Tracing filter directive; debug mode never logs below `debug`
    pub fn log_filter(&self) -> String {
        match (self.debug, self.log_level.as_str()) {
            (true, "trace") => "trace".to_string(),
            (true, _) => "debug".to_string(),
            (false, level) => level.to_string(),
        }
    }
}

/// Merge `.env` into the process environment; variables already set win
pub fn load_dotenv() -> DateTimeApiResult<()> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => {
            return Err(DateTimeApiError::EnvFile {
                message: e.to_string(),
            });
        }
    }
    Ok(())
}

fn parse_port(raw: &str) -> DateTimeApiResult<u16> {
    raw.trim()
        .parse()
        .map_err(|_| DateTimeApiError::InvalidPort {
            value: raw.to_string(),
        })
}

/// Accept the usual level spellings (`WARNING`, `CRITICAL`) alongside tracing's own
fn normalize_log_level(raw: &str) -> String {
    match raw.to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        level => level.to_string(),
    }
}

fn parse_flag(key: &str, raw: &str) -> DateTimeApiResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DateTimeApiError::InvalidFlag {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_map() {
        let config = Config::from_map(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), ("0.0.0.0", 8005));
        assert_eq!(config.timezone, "UTC");
        assert!(config.api_key.is_none());
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_all_values_from_map() {
        let config = Config::from_map([
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DEBUG", "True"),
            ("LOG_LEVEL", "WARNING"),
            ("TIMEZONE", "Europe/Berlin"),
            ("API_KEY", "secret"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(config.debug);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.timezone, "Europe/Berlin");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_map([("PORT", "  "), ("API_KEY", ""), ("TIMEZONE", "")]).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.timezone, "UTC");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let config = Config::from_map([("port", "9000")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_map([("PORT", "invalid_port")]).unwrap_err();
        assert!(matches!(err, DateTimeApiError::InvalidPort { .. }));

        let err = Config::from_map([("PORT", "70000")]).unwrap_err();
        assert!(err.to_string().contains("70000"));
    }

    #[test]
    fn test_invalid_debug_flag() {
        let err = Config::from_map([("DEBUG", "maybe")]).unwrap_err();
        assert!(matches!(err, DateTimeApiError::InvalidFlag { ref key, .. } if key == "DEBUG"));
    }

    #[test]
    fn test_invalid_default_timezone() {
        let err = Config::from_map([("TIMEZONE", "Mars/OlympusMons")]).unwrap_err();
        assert!(matches!(err, DateTimeApiError::InvalidDefaultTimezone { .. }));
    }

    #[test]
    fn test_default_timezone_ignores_case() {
        let config = Config::from_map([("TIMEZONE", "europe/berlin")]).unwrap();
        assert_eq!(config.timezone, "europe/berlin");

        assert!(Config::from_map([("TIMEZONE", "utc")]).is_ok());
    }

    #[test]
    fn test_redacted_masks_api_key() {
        let config = Config {
            api_key: Some("secret".to_string()),
            ..Config::default()
        };

        let redacted = config.redacted();
        assert_eq!(redacted.api_key.as_deref(), Some("********"));
        assert!(!format!("{:?}", redacted).contains("secret"));
        assert!(Config::default().redacted().api_key.is_none());
    }

    #[test]
    fn test_debug_raises_log_filter() {
        let config = Config {
            debug: true,
            log_level: "error".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_filter(), "debug");

        let config = Config {
            debug: true,
            log_level: "trace".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_filter(), "trace");
    }
}
