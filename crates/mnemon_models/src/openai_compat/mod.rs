//! OpenAI-compatible wire formats and HTTP client.
//!
//! Covers the common chat-completions format used by OpenAI, Gemini's
//! compatibility endpoint, and most self-hosted gateways, plus the
//! embeddings endpoint.

mod client;
pub mod conversions;
mod dto;
mod sse;

pub use client::OpenAiCompatClient;
pub use dto::{
    CompletionChoice, CompletionMessage, CompletionRequest, CompletionRequestBuilder,
    CompletionResponse, CompletionUsage, EmbeddingData, EmbeddingRequest, EmbeddingResponse,
    ResponseFormatDto, StreamChoice, StreamChunk, StreamDelta,
};
pub use sse::{SseLine, decode_stream, parse_sse_line};
