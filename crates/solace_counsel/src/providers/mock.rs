//! Scripted provider for tests and offline runs.

use crate::model::{ChatTurn, GenerativeModel, ModelError, StructuredRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// A scripted [`GenerativeModel`]: structured and chat responses are popped
/// from queues, and every structured request is recorded so tests can
/// assert call counts and prompt content.
///
/// Scripted values are returned verbatim with no schema check, so the
/// callers' own validation paths stay exercised. An exhausted structured
/// queue yields a transport error (the offline behavior); an exhausted
/// chat queue yields a canned acknowledgement so the `--mock` loop stays
/// conversational.
#[derive(Default)]
pub struct MockModel {
    structured: Mutex<VecDeque<Result<Value, ModelError>>>,
    chat: Mutex<VecDeque<Result<String, ModelError>>>,
    requests: Mutex<Vec<StructuredRequest>>,
    chat_calls: AtomicUsize,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next structured result.
    pub async fn script_structured(&self, result: Result<Value, ModelError>) {
        self.structured.lock().await.push_back(result);
    }

    /// Queue the next chat result.
    pub async fn script_chat(&self, result: Result<String, ModelError>) {
        self.chat.lock().await.push_back(result);
    }

    /// How many structured calls have been made.
    pub async fn structured_calls(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// How many chat calls have been made.
    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    /// Every structured request seen so far, in call order.
    pub async fn recorded_requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_structured(&self, request: StructuredRequest) -> Result<Value, ModelError> {
        self.requests.lock().await.push(request);
        self.structured
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(ModelError::Transport(
                    "mock model: no scripted structured response".to_string(),
                ))
            })
    }

    async fn chat(
        &self,
        _system: &str,
        _history: &[ChatTurn],
        message: &str,
    ) -> Result<String, ModelError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.chat.lock().await.pop_front().unwrap_or_else(|| {
            Ok(format!(
                "(mock reply) I hear you: \"{}\". Take a slow breath with me.",
                message
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResponseSchema;
    use serde_json::json;

    fn any_request() -> StructuredRequest {
        StructuredRequest::new(
            "prompt",
            ResponseSchema::object(json!({"mood": {"type": "string"}}), &["mood"]),
        )
    }

    #[tokio::test]
    async fn test_scripted_results_pop_in_order() {
        let mock = MockModel::new();
        mock.script_structured(Ok(json!({"mood": "Happy"}))).await;
        mock.script_structured(Err(ModelError::Malformed("broken".into())))
            .await;

        let first = mock.generate_structured(any_request()).await.unwrap();
        assert_eq!(first["mood"], "Happy");
        assert!(mock.generate_structured(any_request()).await.is_err());
        assert_eq!(mock.structured_calls().await, 2);
    }

    #[tokio::test]
    async fn test_exhausted_structured_queue_is_a_transport_error() {
        let mock = MockModel::new();
        let err = mock.generate_structured(any_request()).await.unwrap_err();
        assert!(matches!(err, ModelError::Transport(_)));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let mock = MockModel::new();
        mock.script_structured(Ok(json!({"mood": "Calm"}))).await;
        let _ = mock.generate_structured(any_request()).await;

        let recorded = mock.recorded_requests().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].prompt, "prompt");
    }

    #[tokio::test]
    async fn test_exhausted_chat_queue_stays_conversational() {
        let mock = MockModel::new();
        let reply = mock.chat("persona", &[], "rough day").await.unwrap();
        assert!(reply.contains("rough day"));
        assert_eq!(mock.chat_calls(), 1);
    }
}
