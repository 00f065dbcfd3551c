//! Data transfer objects for OpenAI-compatible APIs.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// Structured-output hint in the OpenAI wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormatDto {
    /// Format name, e.g. "json_object"
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormatDto {
    /// The `json_object` hint.
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// OpenAI chat completion request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<CompletionMessage>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Structured-output hint
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatDto>,
    /// Enable streaming
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

impl CompletionRequest {
    /// Creates a new builder for CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// A choice in the OpenAI response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// The message content
    pub message: CompletionMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: Option<usize>,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: Option<usize>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<usize>,
}

/// OpenAI chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Response choices
    pub choices: Vec<CompletionChoice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

/// Incremental content inside a streaming chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamDelta {
    /// Text fragment, absent on role-only or terminal chunks
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in a streaming chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamChoice {
    /// Incremental content
    #[serde(default)]
    pub delta: Option<StreamDelta>,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// One server-sent chunk of a streaming completion.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamChunk {
    /// Chunk choices
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

impl StreamChunk {
    /// The text fragment carried by this chunk, if any.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.as_ref())
            .and_then(|delta| delta.content.as_deref())
    }
}

/// OpenAI embeddings request.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    /// Model identifier
    pub model: String,
    /// Input texts to embed
    pub input: Vec<String>,
}

/// One embedding result item.
///
/// Delivery order is not guaranteed to match submission order; callers
/// restore it from `index`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    /// Position of the corresponding input text
    pub index: usize,
    /// The embedding vector
    pub embedding: Vec<f32>,
}

/// OpenAI embeddings response.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    /// Result items, in arbitrary order
    pub data: Vec<EmbeddingData>,
}
