/// Errors raised by the time query service
#[derive(Debug, thiserror::Error)]
pub enum TimeServiceError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("{message}")]
    Internal { message: String },
}

impl TimeServiceError {
    /// Whether the failure was caused by caller input rather than the service
    pub fn is_user_error(&self) -> bool {
        matches!(self, TimeServiceError::InvalidTimezone { .. })
    }
}

pub type TimeServiceResult<T> = Result<T, TimeServiceError>;
