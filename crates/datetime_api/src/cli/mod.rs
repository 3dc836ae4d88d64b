use std::collections::HashMap;

use clap::Parser;

use crate::config::{Config, load_dotenv};
use crate::errors::DateTimeApiResult;

/// DateTime Tools API
///
/// An HTTP API serving the current datetime and ISO week number for any
/// IANA timezone.
///
/// ## Endpoints
/// - `GET /`: service metadata
/// - `GET /api/v1/datetime?timezone=UTC`
/// - `GET /api/v1/week-number?timezone=UTC`
///
/// ## Development
/// ```bash
/// cargo run --bin datetime-api-server -- --port 8005
/// curl "http://localhost:8005/api/v1/datetime?timezone=America/New_York"
/// ```
///
/// ## Environment Variables
/// - `HOST`, `PORT`: bind address (default `0.0.0.0:8005`)
/// - `DEBUG`: enable debug logging (default off)
/// - `LOG_LEVEL`: logging verbosity (default `info`)
/// - `TIMEZONE`: timezone used when a request omits one (default `UTC`)
/// - `API_KEY`: require `X-API-Key` on the `/api/v1` routes when set
/// - `RUST_LOG`: overrides the log filter entirely
///
/// Flags take precedence over the environment, which takes precedence over `.env`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "datetime-api-server")]
#[command(about = "HTTP API for timezone-aware datetime and ISO week number queries")]
#[command(version)]
#[command(
    long_about = "Serves the current datetime (ISO 8601) and ISO week number for any IANA timezone over HTTP. \nSettings come from flags, then the environment, then a .env file."
)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, short, value_name = "PORT")]
    pub port: Option<u16>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Logging verbosity (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Timezone used when a request omits `timezone`
    #[arg(long, value_name = "TIMEZONE")]
    pub timezone: Option<String>,

    /// Secret expected in the `X-API-Key` header
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

impl Cli {
    /// Parse CLI arguments and merge them over the environment configuration
    pub fn parse_config() -> DateTimeApiResult<Config> {
        let cli = Self::parse();
        load_dotenv()?;
        cli.config_from(std::env::vars())
    }

    /// Build the configuration from `vars` with every given flag layered on top
    ///
    /// Flags replace the matching variables before anything is parsed, so a
    /// malformed `PORT` or `TIMEZONE` in the environment is harmless when the
    /// flag overrides it.
    pub fn config_from<I, K, V>(self, vars: I) -> DateTimeApiResult<Config>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        vars.extend(self.overrides());
        Config::from_map(vars)
    }

    /// Flags that were given, keyed by the variable they replace
    fn overrides(self) -> Vec<(String, String)> {
        let debug = self.debug.then(|| "true".to_string());
        // an empty key keeps whatever the environment set
        let api_key = self.api_key.filter(|key| !key.is_empty());

        [
            ("HOST", self.host),
            ("PORT", self.port.map(|port| port.to_string())),
            ("DEBUG", debug),
            ("LOG_LEVEL", self.log_level),
            ("TIMEZONE", self.timezone),
            ("API_KEY", api_key),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key.to_string(), value)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DateTimeApiError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("datetime-api-server").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9100",
            "--debug",
            "--log-level",
            "WARNING",
            "--timezone",
            "Asia/Tokyo",
            "--api-key",
            "secret",
        ]);

        let config = cli
            .config_from([("PORT", "9000"), ("TIMEZONE", "Europe/Berlin")])
            .unwrap();

        assert_eq!(config.bind_address(), ("127.0.0.1", 9100));
        assert!(config.debug);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.timezone, "Asia/Tokyo");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_no_flags_keep_environment() {
        let env = [("PORT", "9200"), ("API_KEY", "from-env")];

        let config = parse(&[]).config_from(env).unwrap();

        assert_eq!(config, Config::from_map(env).unwrap());
        assert_eq!(config.port, 9200);
        assert_eq!(config.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_empty_api_key_flag_keeps_environment_key() {
        let config = parse(&["--api-key", ""])
            .config_from([("API_KEY", "from-env")])
            .unwrap();

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_flags_replace_malformed_environment() {
        let env = [("PORT", "abc"), ("TIMEZONE", "Bad/Zone"), ("DEBUG", "maybe")];

        let config = parse(&["--port", "9100", "--timezone", "UTC", "--debug"])
            .config_from(env)
            .unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.timezone, "UTC");
        assert!(config.debug);
    }

    #[test]
    fn test_malformed_environment_without_flag_still_fails() {
        let err = parse(&["--timezone", "UTC"])
            .config_from([("PORT", "abc")])
            .unwrap_err();

        assert!(matches!(err, DateTimeApiError::InvalidPort { .. }));
    }

    #[test]
    fn test_invalid_timezone_flag() {
        let err = parse(&["--timezone", "Not/AZone"])
            .config_from(Vec::<(String, String)>::new())
            .unwrap_err();

        assert!(matches!(err, DateTimeApiError::InvalidDefaultTimezone { .. }));
    }

    #[test]
    fn test_invalid_port_flag_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["datetime-api-server", "--port", "eighty"]).is_err());
    }
}
