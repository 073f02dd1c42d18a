//! Banner and health endpoints.

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::AppState;

/// Root endpoint
pub async fn root() -> &'static str {
    "Red Comunitaria API"
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check with database connectivity
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, database) = match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            ServiceStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ServiceStatus {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let status = if code == StatusCode::OK { "healthy" } else { "degraded" };
    (code, Json(HealthResponse { status, database }))
}

#[derive(Serialize)]
pub struct StatusReport {
    status: &'static str,
    message: &'static str,
    timestamp: DateTime<Utc>,
}

/// Liveness probe used by the frontend
pub async fn health_check() -> Json<StatusReport> {
    Json(StatusReport {
        status: "UP",
        message: "El servicio está funcionando correctamente",
        timestamp: Utc::now(),
    })
}
