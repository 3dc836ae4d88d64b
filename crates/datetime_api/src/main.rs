use datetime_api_server::{cli::Cli, server, utils::logging};

/// DateTime Tools API
///
/// Serves the current datetime and ISO week number for any IANA timezone.
///
/// Usage: cargo run --bin datetime-api-server -- --port 8005
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Flags over environment over .env
    let config = Cli::parse_config()?;

    logging::init_logging(&config)?;
    tracing::debug!("Loaded configuration: {:?}", config.redacted());

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running DateTime Tools API: {}", e);
        return Err(e);
    }

    Ok(())
}
