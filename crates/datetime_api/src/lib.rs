//! # DateTime Tools API
//!
//! HTTP API serving the current datetime and ISO 8601 week number for any
//! IANA timezone.
//!
//! ```no_run
//! use datetime_api_server::{config::Config, server};
//!
//! # async fn start() -> Result<(), Box<dyn std::error::Error>> {
//! server::run(Config::default()).await
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod server;
pub mod utils;
