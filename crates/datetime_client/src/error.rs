/// Failure classes reported by the component; always converted to in-band data
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    #[error("Could not connect to API at {url}. Make sure the API server is running.")]
    Connection { url: String },
    #[error("Request timed out. The API server might be slow or unresponsive.")]
    Timeout,
    #[error("HTTP error occurred: {message}")]
    Http { message: String },
    #[error("An unexpected error occurred: {message}")]
    Unexpected { message: String },
}

impl ClientError {
    /// Classify a transport error; timeouts win over connection failures
    pub fn from_transport(err: reqwest::Error, base_url: &str) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Connection {
                url: base_url.to_string(),
            }
        } else if err.is_decode() || err.is_builder() {
            ClientError::Unexpected {
                message: err.to_string(),
            }
        } else {
            ClientError::Http {
                message: err.to_string(),
            }
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
