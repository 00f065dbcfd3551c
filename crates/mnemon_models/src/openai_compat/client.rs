//! Generic client for OpenAI-compatible APIs.

use crate::openai_compat::{
    CompletionResponse, EmbeddingRequest, EmbeddingResponse, conversions, sse,
};
use async_trait::async_trait;
use mnemon_core::{BackendConfig, ChatRequest};
use mnemon_error::{BackendError, BackendErrorKind};
use mnemon_interface::{ChatDriver, EmbeddingDriver, TextStream};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Generic client for any OpenAI-compatible API.
///
/// Handles the common chat-completions and embeddings formats used by
/// OpenAI, Gemini's compatibility endpoint, and most gateways. One
/// attempt per call; retry policy lives in [`crate::ChatExecutor`].
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    client: Client,
    config: BackendConfig,
}

impl OpenAiCompatClient {
    /// Creates a new client for the given backend configuration.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: BackendConfig) -> Self {
        let client = Client::new();

        debug!(
            model = %config.model(),
            url = config.endpoint(),
            streaming = *config.streaming(),
            "Created OpenAI-compatible client"
        );

        Self { client, config }
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Wraps the client in a [`crate::ChatExecutor`], taking the delivery
    /// mode from the configured streaming flag.
    pub fn into_executor(self) -> crate::ChatExecutor<Self> {
        let streaming = *self.config.streaming();
        crate::ChatExecutor::new(self).with_streaming(streaming)
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        self.config.model()
    }

    async fn post_json(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<reqwest::Response, BackendError> {
        let url = format!("{}{}", self.config.endpoint(), path);

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key()),
            )
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = ?e, "HTTP request failed");
                BackendError::new(BackendErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, error = %error_text, "API error");

            return Err(BackendError::new(BackendErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            }));
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatDriver for OpenAiCompatClient {
    /// Generates a complete response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, request), fields(model = %self.config.model()))]
    async fn complete(&self, request: &ChatRequest) -> Result<String, BackendError> {
        let completion_request =
            conversions::to_completion_request(request, self.config.model(), false)?;

        debug!(
            model = %self.config.model(),
            message_count = completion_request.messages().len(),
            "Sending request"
        );

        let response = self
            .post_json("/chat/completions", &completion_request)
            .await?;

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            BackendError::new(BackendErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(choices = completion.choices.len(), "Received response");

        conversions::from_completion_response(&completion)
    }

    /// Generates a streaming response from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails before any fragment is
    /// delivered; mid-delivery failures surface as `Err` items on the
    /// returned stream.
    #[instrument(skip(self, request), fields(model = %self.config.model()))]
    async fn complete_stream(&self, request: &ChatRequest) -> Result<TextStream, BackendError> {
        let completion_request =
            conversions::to_completion_request(request, self.config.model(), true)?;

        debug!(
            model = %self.config.model(),
            message_count = completion_request.messages().len(),
            "Sending streaming request"
        );

        let response = self
            .post_json("/chat/completions", &completion_request)
            .await?;

        Ok(sse::chunk_stream(response))
    }
}

#[async_trait]
impl EmbeddingDriver for OpenAiCompatClient {
    /// Embeds a batch of texts, restoring submission order by index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, texts), fields(model = %self.config.model(), count = texts.len()))]
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, BackendError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let embedding_request = EmbeddingRequest {
            model: self.config.model().clone(),
            input: texts.to_vec(),
        };

        let response = self.post_json("/embeddings", &embedding_request).await?;

        let embedding_response: EmbeddingResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse embedding response");
            BackendError::new(BackendErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            items = embedding_response.data.len(),
            "Received embedding response"
        );

        Ok(conversions::sort_embedding_data(embedding_response.data))
    }
}
