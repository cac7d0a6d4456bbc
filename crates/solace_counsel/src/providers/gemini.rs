//! Gemini REST provider.
//!
//! Talks to `generativelanguage.googleapis.com` directly. Structured calls
//! set `responseMimeType: application/json` plus a `responseSchema` so the
//! answer comes back as data, not prose; images ride as inline base64
//! parts. No call is ever retried.

use crate::model::{ChatRole, ChatTurn, GenerativeModel, ModelError, StructuredRequest};
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solace_core::ModelConfig;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone)]
pub struct GeminiModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    chat_temperature: f32,
}

impl GeminiModel {
    /// Build a provider from config plus the `GEMINI_API_KEY` environment
    /// variable. A missing key is the one startup condition that is fatal
    /// rather than degradable.
    pub fn from_env(config: &ModelConfig) -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY must be set (the companion cannot start without it)")?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .context("Failed to build HTTP client")?,
            api_key,
            base_url,
            model: config.name.clone(),
            chat_temperature: config.temperature,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    async fn post(&self, request: &GeminiRequest) -> Result<GeminiResponse, ModelError> {
        let response = self
            .client
            .post(self.url())
            .json(request)
            .send()
            .await
            .map_err(|e| ModelError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Transport(format!(
                "Gemini API error: {status} - {body}"
            )));
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Malformed(e.to_string()))?;

        if let Some(error) = &api_response.error {
            return Err(ModelError::Transport(format!(
                "Gemini error: {}",
                error.message
            )));
        }

        Ok(api_response)
    }
}

/// Join the text parts of the first candidate.
fn response_text(response: GeminiResponse) -> Result<String, ModelError> {
    let text: String = response
        .candidates
        .into_iter()
        .flatten()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        Err(ModelError::Malformed("empty response from model".into()))
    } else {
        Ok(text)
    }
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<Value, ModelError> {
        let mut parts = vec![GeminiPart::Text {
            text: request.prompt.clone(),
        }];
        if let Some(image) = &request.image {
            parts.push(GeminiPart::InlineData {
                inline_data: GeminiInlineData {
                    mime_type: image.mime_type.clone(),
                    data: BASE64_STANDARD.encode(&image.data),
                },
            });
        }

        let api_request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts,
            }],
            system_instruction: None,
            generation_config: Some(GeminiGenerationConfig {
                temperature: request.temperature,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(request.schema.to_value()),
            }),
        };

        let text = response_text(self.post(&api_request).await?)?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| ModelError::Malformed(e.to_string()))?;
        request.schema.check_required(&value)?;
        Ok(value)
    }

    async fn chat(
        &self,
        system: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<String, ModelError> {
        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|turn| GeminiContent {
                role: match turn.role {
                    ChatRole::User => "user".to_string(),
                    ChatRole::Assistant => "model".to_string(),
                },
                parts: vec![GeminiPart::Text {
                    text: turn.text.clone(),
                }],
            })
            .collect();
        contents.push(GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart::Text {
                text: message.to_string(),
            }],
        });

        let api_request = GeminiRequest {
            contents,
            system_instruction: Some(GeminiSystemInstruction {
                parts: vec![GeminiTextPart {
                    text: system.to_string(),
                }],
            }),
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.chat_temperature),
                response_mime_type: None,
                response_schema: None,
            }),
        };

        response_text(self.post(&api_request).await?)
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum GeminiPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: GeminiInlineData,
    },
}

#[derive(Serialize)]
struct GeminiInlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}
