//! # DateTime Tools Core
//!
//! Timezone-aware time queries backing the HTTP API.
//!
//! ## Features
//! - Current datetime for any IANA timezone, rendered as ISO 8601
//! - Current ISO 8601 week number for any IANA timezone
//! - Timezone validation on every call
//! - Pluggable clock for deterministic tests
//!
//! ## Modules
//! - `clock`: Clock abstraction and its system/fixed implementations
//! - `error`: Service error types
//! - `models`: Request and response payloads
//! - `provider`: The time query service
//! - `utils`: Formatting helpers and constants

pub mod clock;
pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
