//! Validate Routes - Prompt engineering over HTTP
//!
//! The body is taken as raw JSON first so that each way a request can be
//! malformed maps to its own message.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use kensa::RuleSet;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{ValidationRequest, ValidationResponse};
use crate::AppState;

const RAW_PROMPT: &str = "raw_prompt";

/// Engineer a prompt
///
/// POST /validate-prompt
#[utoipa::path(
    post,
    path = "/validate-prompt",
    request_body = ValidationRequest,
    responses(
        (status = 200, description = "Engineered prompt with analysis", body = ValidationResponse),
        (status = 400, description = "Malformed request", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    ),
    tag = "Validation"
)]
pub async fn validate_prompt(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ValidationResponse>> {
    let request = parse_request(payload)?;

    let rules = request
        .config
        .apply_rules
        .map(RuleSet::parse)
        .unwrap_or_default();
    let model = request
        .config
        .model
        .unwrap_or_else(|| state.config.default_model.clone());
    let request_id = request.request_id;
    let raw_prompt = request.raw_prompt;

    let response = tokio::task::spawn_blocking(move || {
        let result = kensa::engineer(&raw_prompt, &rules, &model);
        let compatibility = kensa::assess_model_compatibility(&result.engineered_prompt, &model);
        ValidationResponse::new(request_id, result, compatibility)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(
        "✅ Validated request {} (rules applied: {:?})",
        response.request_id,
        response.rules_applied()
    );

    Ok(Json(response))
}

fn parse_request(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<ValidationRequest> {
    let Json(value) = payload.map_err(|rejection| match rejection {
        JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedContentType,
        _ => ApiError::InvalidJson,
    })?;

    match value.as_object() {
        Some(object) if object.is_empty() => return Err(ApiError::InvalidJson),
        Some(object) if !object.contains_key(RAW_PROMPT) => {
            return Err(ApiError::MissingField(RAW_PROMPT))
        }
        Some(_) => {}
        None => return Err(ApiError::InvalidJson),
    }

    serde_json::from_value(value).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/validate-prompt", post(validate_prompt))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::{app, config::ServerConfig};

    async fn post(content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/validate-prompt");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let response = app(ServerConfig::default())
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(body: Value) -> (StatusCode, Value) {
        post(Some("application/json"), &body.to_string()).await
    }

    fn assert_failed(body: &Value, message: &str) {
        assert_eq!(body["status"], "validation_failed");
        assert_eq!(body["error"], message);
    }

    #[tokio::test]
    async fn test_binary_search_scenario() {
        let (status, body) = post_json(json!({
            "request_id": "req-42",
            "raw_prompt": "How do I implement a binary search?"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["request_id"], "req-42");
        assert_eq!(body["status"], "validation_success");
        assert_eq!(body["target_model"], "general");
        assert_eq!(
            body["rules_applied"],
            json!(["expert_system", "chain_of_thought", "enhance_clarity"])
        );
        assert_eq!(body["analysis"]["word_count"], 7);
        assert!((body["optimization_score"].as_f64().unwrap() - 0.42).abs() < 1e-9);
        assert_eq!(body["model_compatibility"]["score"], 0.8);
    }

    #[tokio::test]
    async fn test_defaults_request_id() {
        let (status, body) = post_json(json!({"raw_prompt": "Hello"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["request_id"], "unknown");
    }

    #[tokio::test]
    async fn test_explicit_rules_and_model() {
        let (status, body) = post_json(json!({
            "raw_prompt": "Write a tagline for our coffee shop",
            "config": {"model": "claude-3", "apply_rules": ["model_optimize"], "temperature": 0.7}
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rules_applied"], json!(["model_optimize"]));
        assert_eq!(body["target_model"], "claude-3");
        assert_eq!(
            body["model_compatibility"]["optimizations"],
            json!(["Excellent for detailed analysis and reasoning"])
        );
    }

    #[tokio::test]
    async fn test_empty_rules_pass_through() {
        let (status, body) = post_json(json!({
            "raw_prompt": "Hello there",
            "config": {"apply_rules": []}
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["engineered_prompt"], "Hello there");
        assert_eq!(body["rules_applied"], json!([]));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let (status, body) = post(None, r#"{"raw_prompt": "Hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_failed(&body, "Content-Type must be application/json");

        let (status, body) = post(Some("text/plain"), r#"{"raw_prompt": "Hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_failed(&body, "Content-Type must be application/json");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        for payload in ["{not json", "[1, 2]", "{}", "\"text\""] {
            let (status, body) = post(Some("application/json"), payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
            assert_failed(&body, "Invalid JSON payload");
        }
    }

    #[tokio::test]
    async fn test_missing_raw_prompt() {
        let (status, body) = post_json(json!({"request_id": "r"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_failed(&body, "Missing required field: raw_prompt");
    }

    #[tokio::test]
    async fn test_mistyped_field() {
        let (status, body) = post_json(json!({"raw_prompt": 12})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "validation_failed");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request: "));
    }
}
