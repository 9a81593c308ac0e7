//! Kensa API Client

use anyhow::{bail, Context, Result};
use kensa::{EngineeringResult, ModelCompatibility};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

/// API Client for a running kensa-server
pub struct KensaClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ValidateRequest {
    pub request_id: String,
    pub raw_prompt: String,
    pub config: ValidateConfig,
}

#[derive(Debug, Serialize)]
pub struct ValidateConfig {
    pub model: String,
    pub apply_rules: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub request_id: String,
    pub status: String,
    #[serde(flatten)]
    pub result: EngineeringResult,
    pub model_compatibility: ModelCompatibility,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl KensaClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Engineer a prompt on the server
    pub async fn validate(&self, request: &ValidateRequest) -> Result<ValidateResponse> {
        let resp = self
            .client
            .post(self.url("/validate-prompt"))
            .json(request)
            .send()
            .await
            .context("Failed to connect to Kensa API")?;

        let resp = check_status(resp).await?;

        resp.json().await.context("Failed to parse response")
    }
}

async fn check_status(resp: Response) -> Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    bail!("API error ({}): {}", status, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = KensaClient::new("http://localhost:5001/");
        assert_eq!(client.url("/health"), "http://localhost:5001/health");
    }

    #[test]
    fn test_request_wire_shape() {
        let request = ValidateRequest {
            request_id: "cli".into(),
            raw_prompt: "Hi".into(),
            config: ValidateConfig {
                model: "general".into(),
                apply_rules: vec!["auto_optimize".into()],
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "request_id": "cli",
                "raw_prompt": "Hi",
                "config": {"model": "general", "apply_rules": ["auto_optimize"]}
            })
        );
    }

    #[test]
    fn test_response_from_server_json() {
        let result = kensa::engineer("Hi", &kensa::RuleSet::empty(), "general");
        let mut body = serde_json::to_value(&result).unwrap();
        body["request_id"] = json!("cli");
        body["status"] = json!("validation_success");
        body["model_compatibility"] = json!({"score": 0.8, "notes": [], "optimizations": []});

        let parsed: ValidateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.result, result);
        assert_eq!(parsed.model_compatibility.score, 0.8);
    }
}
