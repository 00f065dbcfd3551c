//! Trait definitions for the Mnemon LLM resilience library.
//!
//! These traits sit at the backend seam: HTTP clients implement them on
//! one side, and the retry executor consumes them on the other. Tests
//! substitute mock drivers at the same seam.

use async_trait::async_trait;
use futures_util::Stream;
use mnemon_core::ChatRequest;
use mnemon_error::{BackendError, BackendErrorKind};
use std::pin::Pin;

/// An ordered sequence of incremental text fragments from one attempt.
///
/// End of stream is signaled by exhaustion; a mid-delivery failure
/// surfaces as an `Err` item.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, BackendError>> + Send>>;

/// A backend capable of chat-completion generation.
#[async_trait]
pub trait ChatDriver: Send + Sync {
    /// Performs one generation attempt, returning the complete text payload.
    async fn complete(&self, request: &ChatRequest) -> Result<String, BackendError>;

    /// Performs one generation attempt in streaming mode.
    ///
    /// The returned stream yields text fragments in delivery order.
    async fn complete_stream(&self, request: &ChatRequest) -> Result<TextStream, BackendError>;
}

/// A backend capable of turning texts into embedding vectors.
#[async_trait]
pub trait EmbeddingDriver: Send + Sync {
    /// Embeds a batch of texts, returning vectors in submission order.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, BackendError>;

    /// Embeds one text.
    async fn embed_single(&self, text: &str) -> Result<Vec<f32>, BackendError> {
        let input = [text.to_string()];
        let mut vectors = self.embed(&input).await?;
        vectors.pop().ok_or_else(|| {
            BackendError::new(BackendErrorKind::ResponseParsing(
                "Empty embedding response".to_string(),
            ))
        })
    }
}
