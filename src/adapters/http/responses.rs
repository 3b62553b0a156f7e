use serde::{Deserialize, Serialize};

use crate::{ARCHITECTURE, SERVICE_NAME};

/// Body of the health and readiness probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self::with_status("healthy")
    }

    pub fn ready() -> Self {
        Self::with_status("ready")
    }

    fn with_status(status: &str) -> Self {
        Self {
            status: status.to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub architecture: String,
}

impl RootResponse {
    pub fn greeting() -> Self {
        Self {
            message: format!("Hello from {}", SERVICE_NAME),
            architecture: ARCHITECTURE.to_string(),
        }
    }
}
