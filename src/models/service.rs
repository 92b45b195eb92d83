//! Service-level DTOs.
//!
//! - `ServiceInfo`: what GET / answers - the served repository plus an
//!   endpoint directory
//! - `HealthStatus`: liveness payload for GET /health

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub repository: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl ServiceInfo {
    pub fn for_repository(owner: &str, repo: &str) -> Self {
        Self {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            repository: format!("{}/{}", owner, repo),
            endpoints: vec![
                EndpointInfo::new("GET", "/", "This description"),
                EndpointInfo::new(
                    "GET",
                    "/files",
                    "Flat path -> file map of the whole repository; ?path= walks a subtree",
                ),
                EndpointInfo::new("GET", "/health", "Liveness and uptime"),
            ],
        }
    }
}

impl EndpointInfo {
    fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: u64,
}
