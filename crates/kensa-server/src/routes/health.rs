//! Health Routes - Liveness check and service info

use axum::{routing::get, Json, Router};
use std::collections::BTreeMap;

use crate::models::{HealthCheck, ServiceInfo, SERVICE_NAME};
use crate::AppState;

/// Health check
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Service info
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service description and endpoint map", body = ServiceInfo)
    ),
    tag = "Health"
)]
pub async fn service_info() -> Json<ServiceInfo> {
    let endpoints = [
        ("POST /validate-prompt", "Engineer a prompt and report on it"),
        ("GET /health", "Health check"),
        ("GET /swagger-ui", "Interactive API documentation"),
    ]
    .into_iter()
    .map(|(route, purpose)| (route.to_string(), purpose.to_string()))
    .collect::<BTreeMap<_, _>>();

    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Kensa (検査) - Rule-based prompt validation and optimization".to_string(),
        endpoints,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
}
