//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use kensa::{Analysis, EngineeringResult, ModelCompatibility, RuleName};

use crate::error::ErrorResponse;
use crate::models::{
    HealthCheck, ServiceInfo, ValidationConfig, ValidationRequest, ValidationResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        super::health::health_check,
        super::health::service_info,
        // Validation endpoints
        super::validate::validate_prompt,
    ),
    info(
        title = "Kensa API",
        version = "0.2.0",
        description = "検査 (Inspection) - Rule-based prompt validation API\n\nAnalyzes a raw prompt and rewrites it through an ordered rule pipeline.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Validation", description = "Validation - Prompt analysis and rewriting"),
    ),
    components(
        schemas(
            // Validation
            ValidationRequest,
            ValidationConfig,
            ValidationResponse,
            ErrorResponse,
            // Domain
            Analysis,
            EngineeringResult,
            ModelCompatibility,
            RuleName,
            // Health
            HealthCheck,
            ServiceInfo,
        )
    ),
)]
pub struct ApiDoc;
