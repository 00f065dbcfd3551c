//! Backend error types for generation and embedding calls.

/// Failure conditions for one backend attempt.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BackendErrorKind {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Failed to parse the response body
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Streaming delivery failed mid-response
    #[display("Stream interrupted: {}", _0)]
    Stream(String),

    /// API key not found in environment
    #[display("No API key set (GEMINI_API_KEY or OPENAI_API_KEY)")]
    MissingApiKey,

    /// Request construction failed
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Backend error with source location tracking.
///
/// # Examples
///
/// ```
/// use mnemon_error::{BackendError, BackendErrorKind};
///
/// let err = BackendError::new(BackendErrorKind::Http("connection refused".to_string()));
/// assert!(format!("{}", err).contains("connection refused"));
/// ```
#[derive(Debug, Clone)]
pub struct BackendError {
    /// The kind of error that occurred
    pub kind: BackendErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl BackendError {
    /// Create a new BackendError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackendErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Backend Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for BackendError {}
