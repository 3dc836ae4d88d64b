use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::{
    AppState,
    error::{ApiError, ApiResult},
};
use crate::core::models::{DatetimeResponse, ServiceInfo, TimezoneQuery, WeekNumberResponse};

/// Static service metadata; never touches the time service
pub async fn root() -> Json<ServiceInfo> {
    tracing::info!("Root endpoint called");
    Json(ServiceInfo::current())
}

pub async fn get_current_datetime(
    State(state): State<AppState>,
    query: Result<Query<TimezoneQuery>, QueryRejection>,
) -> ApiResult<Json<DatetimeResponse>> {
    let timezone = state.timezone_or_default(query_timezone(query)?);
    let datetime = state
        .service
        .current_instant(&timezone)
        .inspect_err(|e| tracing::error!("Error getting datetime: {}", e))?;

    tracing::info!("Successfully retrieved datetime: {}", datetime);
    Ok(Json(DatetimeResponse { datetime }))
}

pub async fn get_week_number(
    State(state): State<AppState>,
    query: Result<Query<TimezoneQuery>, QueryRejection>,
) -> ApiResult<Json<WeekNumberResponse>> {
    let timezone = state.timezone_or_default(query_timezone(query)?);
    let week_number = state
        .service
        .current_week_number(&timezone)
        .inspect_err(|e| tracing::error!("Error getting week number: {}", e))?;

    tracing::info!("Successfully retrieved week number: {}", week_number);
    Ok(Json(WeekNumberResponse { week_number }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

fn query_timezone(query: Result<Query<TimezoneQuery>, QueryRejection>) -> ApiResult<Option<String>> {
    let Query(query) = query.map_err(|e| ApiError::InvalidQuery {
        message: e.body_text(),
    })?;
    Ok(query.timezone)
}
