//! `generateContent` transport: request construction, response unwrapping,
//! and local schema validation of the candidate JSON.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use ver_config::GeminiConfig;
use ver_schema::SchemaRegistry;

use crate::error::LlmError;

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";
/// Wait used when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a serde_json::Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Failure body: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, LlmError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LlmError::Blocked(reason));
        }
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse("no candidates returned".into()))?;
        let finish_reason = candidate.finish_reason.unwrap_or_default();
        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse(format!(
                "candidate has no text (finish reason: {finish_reason})"
            )));
        }
        Ok(text)
    }
}

// ── Status mapping ─────────────────────────────────────────────────

/// Pass successful replies through; map 429 to `RateLimited` and every other
/// failure to `Api` carrying the service's own error message.
async fn error_for_status(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return Err(LlmError::RateLimited { retry_after_secs });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(LlmError::Api {
        status: status.as_u16(),
        message: api_error_message(&body),
    })
}

/// `STATUS: message` from a Gemini error body, or the trimmed raw body.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => match error.status {
            Some(status) => format!("{status}: {}", error.message),
            None => error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Gemini `generateContent` API.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    schemas: SchemaRegistry,
}

impl GeminiClient {
    /// Build a client from configuration. A missing API key is allowed; calls
    /// then fail with their documented fallback.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Http` if the underlying `reqwest::Client` fails to build.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("veridian/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        if !config.is_configured() {
            tracing::warn!("Gemini API key is not configured; remote analysis is disabled");
        }
        Ok(Self {
            http,
            config,
            schemas: SchemaRegistry::new(),
        })
    }

    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Send one prompt and decode the candidate JSON as `T` after validating
    /// it against the named registry schema. Single attempt, no retries.
    pub(crate) async fn generate<T: DeserializeOwned>(
        &self,
        prompt: &str,
        response_schema: &serde_json::Value,
        temperature: f32,
        schema_name: &str,
    ) -> Result<T, LlmError> {
        if !self.is_configured() {
            return Err(LlmError::NotConfigured);
        }

        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema,
                temperature,
            },
        };

        tracing::debug!(model = %self.config.model, schema = schema_name, "sending generateContent request");
        let resp = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = error_for_status(resp).await?;

        let envelope: GenerateContentResponse = resp.json().await?;
        let text = envelope.into_text()?;
        let value: serde_json::Value = serde_json::from_str(text.trim())
            .map_err(|e| LlmError::Parse(format!("candidate text is not JSON: {e}")))?;
        self.schemas.validate(schema_name, &value)?;
        serde_json::from_value(value).map_err(|e| LlmError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn text_parts_are_concatenated() {
        let resp = envelope(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] },
                "finishReason": "STOP"
            }]
        }));
        assert_eq!(resp.into_text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn block_reason_is_reported() {
        let resp = envelope(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }));
        assert!(matches!(resp.into_text(), Err(LlmError::Blocked(reason)) if reason == "SAFETY"));
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let resp = envelope(serde_json::json!({}));
        assert!(matches!(resp.into_text(), Err(LlmError::EmptyResponse(_))));
    }

    #[test]
    fn candidate_without_content_reports_finish_reason() {
        let resp = envelope(serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }));
        let Err(LlmError::EmptyResponse(message)) = resp.into_text() else {
            panic!("expected EmptyResponse");
        };
        assert!(message.contains("SAFETY"));
    }

    #[test]
    fn error_envelope_message_includes_status() {
        let body = r#"{"error":{"code":403,"message":"API key not valid.","status":"PERMISSION_DENIED"}}"#;
        assert_eq!(api_error_message(body), "PERMISSION_DENIED: API key not valid.");
    }

    #[test]
    fn error_envelope_without_status_is_message_only() {
        assert_eq!(
            api_error_message(r#"{"error":{"message":"quota exceeded"}}"#),
            "quota exceeded"
        );
    }

    #[test]
    fn non_json_error_body_is_kept_raw() {
        assert_eq!(api_error_message("  upstream timeout\n"), "upstream timeout");
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiClient::new(GeminiConfig {
            endpoint: "http://localhost:9999/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.url(),
            "http://localhost:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_shape() {
        let schema = serde_json::json!({ "type": "OBJECT" });
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &schema,
                temperature: 0.1,
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(json["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }
}
