//! Liveness endpoint.
//!
//! GET /health - always 200 with the start time and uptime in seconds.

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use std::time::Instant;

use crate::models::HealthStatus;

/// Captured once at startup; uptime runs on the monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct ServerStart {
    started_at: DateTime<Utc>,
    instant: Instant,
}

impl ServerStart {
    pub fn now() -> Self {
        Self {
            started_at: Utc::now(),
            instant: Instant::now(),
        }
    }
}

pub fn routes(start: ServerStart) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .with_state(start)
}

async fn get_health(State(start): State<ServerStart>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        started_at: start.started_at,
        uptime_secs: start.instant.elapsed().as_secs(),
    })
}
