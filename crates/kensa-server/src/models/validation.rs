//! Validation Models
//!
//! Request and response bodies for `POST /validate-prompt`.

use kensa::{EngineeringResult, ModelCompatibility, RuleName};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "validation_success";
const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Validation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ValidationRequest {
    /// Caller-chosen correlation id (default: "unknown")
    #[serde(default = "default_request_id")]
    pub request_id: String,
    /// Prompt to engineer
    pub raw_prompt: String,
    #[serde(default)]
    pub config: ValidationConfig,
}

fn default_request_id() -> String {
    UNKNOWN_REQUEST_ID.to_string()
}

/// Per-request engine settings
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ValidationConfig {
    /// Target model (default: server's default model)
    pub model: Option<String>,
    /// Rule names to apply (default: ["auto_optimize"])
    pub apply_rules: Option<Vec<String>>,
}

/// Successful validation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationResponse {
    pub request_id: String,
    /// Always "validation_success"
    pub status: String,
    #[serde(flatten)]
    pub result: EngineeringResult,
    pub model_compatibility: ModelCompatibility,
}

impl ValidationResponse {
    pub fn new(
        request_id: String,
        result: EngineeringResult,
        model_compatibility: ModelCompatibility,
    ) -> Self {
        Self {
            request_id,
            status: STATUS_SUCCESS.to_string(),
            result,
            model_compatibility,
        }
    }

    pub fn rules_applied(&self) -> &[RuleName] {
        &self.result.rules_applied
    }
}
