use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::client::PortalClient;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Build the report for a given upstream reachability result.
pub async fn health_report(client: &PortalClient) -> HealthResponse {
    let upstream = match client.ping().await {
        Ok(status) => format!("reachable ({status})"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the portal API");
            format!("unreachable: {e}")
        }
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    HealthResponse {
        status: "ok".to_string(),
        upstream,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// `GET /health`.
pub async fn health_check() -> Json<HealthResponse> {
    Json(health_report(PortalClient::shared()).await)
}
