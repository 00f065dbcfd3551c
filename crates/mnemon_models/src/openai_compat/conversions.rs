//! Type conversions between Mnemon and OpenAI wire formats.

use crate::openai_compat::{
    CompletionMessage, CompletionRequest, CompletionResponse, EmbeddingData, ResponseFormatDto,
};
use mnemon_core::{ChatRequest, ResponseFormat};
use mnemon_error::{BackendError, BackendErrorKind};

/// Converts a Mnemon ChatRequest to the OpenAI chat format.
pub fn to_completion_request(
    req: &ChatRequest,
    model: &str,
    stream: bool,
) -> Result<CompletionRequest, BackendError> {
    let messages = req
        .messages()
        .iter()
        .map(|msg| CompletionMessage {
            role: msg.role.as_str().to_string(),
            content: msg.content.clone(),
        })
        .collect::<Vec<_>>();

    let mut builder = CompletionRequest::builder();
    builder
        .model(model.to_string())
        .messages(messages)
        .temperature(Some(*req.temperature()));

    if let Some(ResponseFormat::JsonObject) = req.response_format() {
        builder.response_format(Some(ResponseFormatDto::json_object()));
    }

    if stream {
        builder.stream(Some(true));
    }

    builder.build().map_err(|e| {
        BackendError::new(BackendErrorKind::Builder(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Extracts the text payload from a chat completion response.
pub fn from_completion_response(response: &CompletionResponse) -> Result<String, BackendError> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| {
            BackendError::new(BackendErrorKind::ResponseParsing(
                "No choices in response".to_string(),
            ))
        })
}

/// Restores submission order for embedding results.
///
/// The backend does not guarantee that result items arrive in the order
/// the inputs were submitted, so vectors are reordered by `index`.
pub fn sort_embedding_data(mut data: Vec<EmbeddingData>) -> Vec<Vec<f32>> {
    data.sort_by_key(|item| item.index);
    data.into_iter().map(|item| item.embedding).collect()
}
