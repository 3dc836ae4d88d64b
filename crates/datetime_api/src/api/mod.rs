//! HTTP endpoint layer
//!
//! Maps `GET /`, `GET /api/v1/datetime` and `GET /api/v1/week-number` onto the
//! time query service and converts its failures into status codes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod security;

use std::sync::Arc;

use axum::{Router, middleware::from_fn, middleware::from_fn_with_state, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::core::{
    provider::TimeQueryService,
    utils::{DATETIME_PATH, WEEK_NUMBER_PATH},
};
use security::ApiKey;

/// Shared, immutable router state
#[derive(Clone)]
pub struct AppState {
    pub service: TimeQueryService,
    default_timezone: Arc<str>,
}

impl AppState {
    pub fn new(service: TimeQueryService, default_timezone: &str) -> Self {
        Self {
            service,
            default_timezone: Arc::from(default_timezone),
        }
    }

    pub fn timezone_or_default(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.default_timezone.to_string())
    }
}

/// Router backed by the system clock
pub fn router(config: &Config) -> Router {
    router_with_service(config, TimeQueryService::new())
}

pub fn router_with_service(config: &Config, service: TimeQueryService) -> Router {
    let state = AppState::new(service, &config.timezone);

    let mut time_routes = Router::new()
        .route(DATETIME_PATH, get(handlers::get_current_datetime))
        .route(WEEK_NUMBER_PATH, get(handlers::get_week_number));

    if let Some(api_key) = config.api_key.as_deref() {
        tracing::info!("API key required for {} and {}", DATETIME_PATH, WEEK_NUMBER_PATH);
        time_routes = time_routes.route_layer(from_fn_with_state(
            ApiKey::new(api_key),
            security::require_api_key,
        ));
    }

    Router::new()
        .route("/", get(handlers::root))
        .merge(time_routes)
        .fallback(handlers::not_found)
        .layer(from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_or_default() {
        let state = AppState::new(TimeQueryService::new(), "Europe/Paris");

        assert_eq!(state.timezone_or_default(None), "Europe/Paris");
        assert_eq!(
            state.timezone_or_default(Some("Asia/Tokyo".to_string())),
            "Asia/Tokyo"
        );
    }
}
