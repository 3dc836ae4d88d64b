use tokio::net::TcpListener;

use crate::api;
use crate::config::Config;

/// Bind the configured address and serve until Ctrl+C
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let app = api::router(&config);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .inspect_err(|e| {
            tracing::error!("Failed to bind {}:{}: {}", config.host, config.port, e);
        })?;
    tracing::info!(
        "DateTime Tools API listening on {} (default timezone: {})",
        listener.local_addr()?,
        config.timezone
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;

    tracing::info!("DateTime Tools API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
