//! Resilient structured-output client for LLM backends.
//!
//! Mnemon turns an unreliable, free-text-producing model backend into a
//! dependable source of structured data:
//!
//! - [`ChatExecutor`] runs a generation request with deterministic
//!   exponential backoff, aggregating streamed fragments into one text.
//! - [`extract_json`] recovers a JSON value from whatever the model
//!   actually emitted, via an ordered chain of repair strategies.
//! - [`OpenAiCompatClient`] speaks the chat-completions and embeddings
//!   wire formats shared by OpenAI-style endpoints.
//!
//! ```no_run
//! use mnemon::{BackendConfig, ChatExecutor, ChatMessage, ChatRequest, OpenAiCompatClient, extract_json};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BackendConfig::from_env()?;
//! let executor = ChatExecutor::new(OpenAiCompatClient::new(config));
//!
//! let request = ChatRequest::builder()
//!     .messages(vec![ChatMessage::user("List three facts as a JSON array.")])
//!     .build()?;
//!
//! let text = executor.execute(&request).await?;
//! let facts = extract_json(&text)?;
//! println!("{} (via {})", facts.value, facts.strategy);
//! # Ok(())
//! # }
//! ```

pub use mnemon_core::{
    BackendConfig, BackendConfigBuilder, ChatMessage, ChatRequest, ChatRequestBuilder,
    ResponseFormat, Role,
};
pub use mnemon_error::{
    BackendError, BackendErrorKind, EXCERPT_LEN, ExtractError, ExtractErrorKind,
};
pub use mnemon_extract::{Extraction, Strategy, clean_json, extract_json, scan_balanced};
pub use mnemon_interface::{ChatDriver, EmbeddingDriver, TextStream};
pub use mnemon_models::{ChatExecutor, OpenAiCompatClient, backoff_delay, collect_stream};
