//! # DateTime API Client
//!
//! Workflow component that calls the DateTime Tools API and reshapes the
//! results into host values: text records, messages and single-row tables.
//!
//! ## Modules
//! - `component`: The component and its three outputs
//! - `config`: API location and request timeout
//! - `error`: Failure classification
//! - `http_client`: HTTP access to the `/api/v1` endpoints
//! - `models`: Host data shapes and component metadata

pub mod component;
pub mod config;
pub mod error;
pub mod http_client;
pub mod models;

pub use component::DateTimeApiComponent;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use models::{Data, DataFrame, Message};
