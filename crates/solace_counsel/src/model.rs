//! The vendor-neutral generative-model boundary.
//!
//! Callers describe what they want (a prompt, optionally an image, and a
//! response schema the model must answer against) and get back either a
//! JSON value or a `ModelError`. Which provider answers is behind the
//! [`GenerativeModel`] trait; the pipeline above it never touches wire
//! formats.

use crate::schema::ResponseSchema;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// The closed failure taxonomy at the model boundary. Callers decide what a
/// failure means; typically they map it to a deterministic fallback value.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Network error, non-2xx status, or a model-side error body.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response text was not decodable as JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The response decoded but is missing required fields or has the
    /// wrong shape.
    #[error("schema violation: {0}")]
    SchemaViolation(String),
}

/// An inline image riding along with a structured request.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn jpeg(data: Vec<u8>) -> Self {
        Self {
            mime_type: "image/jpeg".to_string(),
            data,
        }
    }
}

/// One constrained-output request: a prompt, an optional image, and the
/// schema the answer must match.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub prompt: String,
    pub image: Option<ImagePayload>,
    pub schema: ResponseSchema,
    pub temperature: Option<f32>,
}

impl StructuredRequest {
    pub fn new(prompt: impl Into<String>, schema: ResponseSchema) -> Self {
        Self {
            prompt: prompt.into(),
            image: None,
            schema,
            temperature: None,
        }
    }

    pub fn with_image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Who spoke a prior chat turn, from the model's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior turn of the companion conversation.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// One-shot structured generation: the returned value is JSON the
    /// provider has already checked against `request.schema.required`.
    async fn generate_structured(&self, request: StructuredRequest) -> Result<Value, ModelError>;

    /// One turn of open-ended conversation under a fixed system
    /// instruction, given the prior transcript.
    async fn chat(
        &self,
        system: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> Result<String, ModelError>;
}
