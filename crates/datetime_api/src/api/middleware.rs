use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log method, path and outcome of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    tracing::info!("Received request: {} {}", method, path);
    tracing::debug!("Headers: {:?}", request.headers().keys().collect::<Vec<_>>());

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!("{} {} -> {} ({} ms)", method, path, status, elapsed_ms);
    } else if status.is_client_error() {
        tracing::warn!("{} {} -> {} ({} ms)", method, path, status, elapsed_ms);
    } else {
        tracing::info!("{} {} -> {} ({} ms)", method, path, status, elapsed_ms);
    }

    response
}
