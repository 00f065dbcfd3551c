//! Backend configuration.
//!
//! Configuration is an explicit immutable value handed to a client at
//! construction. Nothing here reads ambient process state after startup,
//! so independent callers never couple through hidden globals.

use mnemon_error::{BackendError, BackendErrorKind};

/// Default chat-completion endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for one backend.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct BackendConfig {
    /// Target model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// API credential
    api_key: String,
    /// Alternate endpoint, if not the default
    #[builder(default)]
    base_url: Option<String>,
    /// Deliver responses as incremental fragments
    #[builder(default)]
    streaming: bool,
}

impl BackendConfig {
    /// Returns a builder for constructing a BackendConfig.
    pub fn builder() -> BackendConfigBuilder {
        BackendConfigBuilder::default()
    }

    /// Builds a config from environment variables.
    ///
    /// Reads `GEMINI_API_KEY` (falling back to `OPENAI_API_KEY`),
    /// `MNEMON_MODEL`, `MNEMON_BASE_URL` and `MNEMON_STREAMING`. A `.env`
    /// file is honored if present.
    ///
    /// # Errors
    ///
    /// Returns [`BackendErrorKind::MissingApiKey`] when no credential is set.
    pub fn from_env() -> Result<Self, BackendError> {
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .map_err(|_| BackendError::new(BackendErrorKind::MissingApiKey))?;

        let model = std::env::var("MNEMON_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("MNEMON_BASE_URL").ok();
        let streaming = std::env::var("MNEMON_STREAMING")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            model,
            api_key,
            base_url,
            streaming,
        })
    }

    /// Endpoint to use, falling back to the default when no override is set.
    pub fn endpoint(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}
