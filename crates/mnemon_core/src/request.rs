//! Request types for LLM generation.

use crate::ChatMessage;
use serde::{Deserialize, Serialize};

/// Structured-output hint passed through to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseFormat {
    /// Ask the backend to emit a JSON object.
    JsonObject,
}

/// One logical generation request.
///
/// Immutable once built; owns no long-lived resources and is discarded
/// after use.
///
/// # Examples
///
/// ```
/// use mnemon_core::{ChatMessage, ChatRequest};
///
/// let request = ChatRequest::builder()
///     .messages(vec![ChatMessage::user("Summarize this.")])
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.max_retries(), 3);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Ordered conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default = "0.2")]
    temperature: f32,
    /// Optional structured-output hint
    #[builder(default)]
    response_format: Option<ResponseFormat>,
    /// Maximum number of attempts before giving up
    #[builder(default = "3")]
    max_retries: usize,
}

impl ChatRequest {
    /// Returns a builder for constructing a ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}
