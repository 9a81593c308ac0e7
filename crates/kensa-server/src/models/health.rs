//! Health and service info models

use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "kensa-prompt-validation";

/// Liveness check body
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    /// Always "healthy"
    pub status: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub service: String,
}

/// Root endpoint body
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub description: String,
    /// Route -> purpose
    pub endpoints: BTreeMap<String, String>,
}
