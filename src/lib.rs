pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub const SERVICE_NAME: &str = "template-service";
pub const SERVICE_DESCRIPTION: &str = "Microservice template with onion layering";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const ARCHITECTURE: &str = "onion";

#[cfg(feature = "cli")]
pub use crate::config::cli::CliArgs;

pub use crate::adapters::http::{router, AppState, HealthResponse, RootResponse};
pub use crate::config::ServiceConfig;
pub use crate::core::{Server, ShutdownSignal};
pub use crate::utils::error::{Result, ServiceError};
