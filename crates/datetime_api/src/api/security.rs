use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::api::error::{ApiError, ApiResult};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Configured secret for the `X-API-Key` guard
#[derive(Clone)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }

    /// Check the request headers; an empty header counts as missing
    pub fn verify(&self, headers: &HeaderMap) -> ApiResult<()> {
        let provided = headers
            .get(API_KEY_HEADER)
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::MissingApiKey)?;

        if provided.as_bytes() != self.0.as_bytes() {
            return Err(ApiError::InvalidApiKey);
        }
        Ok(())
    }
}

/// Route layer rejecting requests without the configured API key
pub async fn require_api_key(
    State(api_key): State<ApiKey>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    api_key.verify(request.headers()).inspect_err(|e| {
        tracing::warn!(
            "Rejected {} {}: {}",
            request.method(),
            request.uri().path(),
            e
        )
    })?;

    Ok(next.run(request).await)
}
