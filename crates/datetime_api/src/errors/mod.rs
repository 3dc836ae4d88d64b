/// Result type for startup operations
pub type DateTimeApiResult<T> = Result<T, DateTimeApiError>;

/// Startup errors: configuration, CLI and logging
#[derive(thiserror::Error, Debug)]
pub enum DateTimeApiError {
    #[error("Invalid port: {value}")]
    InvalidPort { value: String },
    #[error("Invalid boolean for {key}: {value}")]
    InvalidFlag { key: String, value: String },
    #[error("Invalid default timezone: {timezone}")]
    InvalidDefaultTimezone { timezone: String },
    #[error("Failed to read .env file: {message}")]
    EnvFile { message: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

#[cfg(test)]
mod tests {
    use super::DateTimeApiError;

    #[test]
    fn test_error_messages() {
        let error = DateTimeApiError::InvalidPort {
            value: "eighty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid port: eighty");

        let error = DateTimeApiError::InvalidDefaultTimezone {
            timezone: "Mars/OlympusMons".to_string(),
        };
        assert!(error.to_string().contains("Mars/OlympusMons"));
    }
}
