use async_trait::async_trait;
use schemars::generate::SchemaSettings;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz::QuizPayload;

/// One outbound generation request. A populated `response_schema` switches
/// the call into schema-constrained JSON mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelRequest {
    pub prompt: String,
    pub temperature: f32,
    pub response_schema: Option<Value>,
}

impl ModelRequest {
    pub fn text(prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            response_schema: None,
        }
    }

    pub fn structured(prompt: impl Into<String>, temperature: f32, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            temperature,
            response_schema: Some(schema),
        }
    }
}

/// Seam to the external generation API. Single best-effort operation: no
/// timeout, no retry, no partial-result handling.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Issues one generation call and returns the raw response text verbatim.
    async fn generate(&self, request: ModelRequest) -> AppResult<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ModelBackend for GeminiClient {
    async fn generate(&self, request: ModelRequest) -> AppResult<String> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            log::error!("generation attempted without GEMINI_API_KEY configured");
            AppError::GenerationError
        })?;

        let body = GenerateContentRequest::from(request);

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key.expose_secret())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                log::error!("Gemini request failed: {err}");
                AppError::GenerationError
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Gemini returned {status}: {detail}");
            return Err(AppError::GenerationError);
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            log::error!("failed to decode Gemini response: {err}");
            AppError::GenerationError
        })?;

        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                log::error!("Gemini response contained no candidate text");
                AppError::GenerationError
            })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl From<ModelRequest> for GenerateContentRequest {
    fn from(request: ModelRequest) -> Self {
        let response_mime_type = request
            .response_schema
            .is_some()
            .then(|| "application/json".to_string());

        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                response_mime_type,
                response_schema: request.response_schema,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Declared schema for quiz responses, derived from [`QuizPayload`] and
/// rewritten to the API's OpenAPI-subset `Type` spelling.
pub fn quiz_response_schema() -> Value {
    let mut settings = SchemaSettings::default();
    settings.inline_subschemas = true;
    let mut schema = settings
        .into_generator()
        .into_root_schema_for::<QuizPayload>()
        .to_value();
    to_api_schema(&mut schema);
    schema
}

fn to_api_schema(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("$schema");
            map.remove("title");
            if let Some(Value::String(ty)) = map.get_mut("type") {
                *ty = ty.to_ascii_uppercase();
            }
            for child in map.values_mut() {
                to_api_schema(child);
            }
        }
        Value::Array(items) => {
            for child in items {
                to_api_schema(child);
            }
        }
        _ => {}
    }
}
