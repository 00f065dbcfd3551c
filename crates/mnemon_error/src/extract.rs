//! Extraction error types.

/// Maximum number of characters of the offending text carried for diagnosis.
pub const EXCERPT_LEN: usize = 300;

/// Failure conditions for JSON extraction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ExtractErrorKind {
    /// Raw response was empty or whitespace-only
    #[display("Empty response received")]
    EmptyResponse,

    /// Every extraction strategy failed
    #[display("Failed to extract valid JSON from response. First {} chars: {}...", EXCERPT_LEN, excerpt)]
    Exhausted {
        /// Bounded prefix of the unparseable input
        excerpt: String,
    },
}

impl ExtractErrorKind {
    /// Builds an `Exhausted` kind, truncating the input to [`EXCERPT_LEN`]
    /// characters on a character boundary.
    pub fn exhausted(text: &str) -> Self {
        let excerpt = text.chars().take(EXCERPT_LEN).collect();
        ExtractErrorKind::Exhausted { excerpt }
    }
}

/// Extraction error with source location tracking.
///
/// Extraction failures are never retried internally: reparsing the same
/// text cannot succeed, so the caller decides whether to regenerate.
///
/// # Examples
///
/// ```
/// use mnemon_error::{ExtractError, ExtractErrorKind};
///
/// let err = ExtractError::new(ExtractErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("Empty response"));
/// ```
#[derive(Debug, Clone)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// File where the error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Extraction Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ExtractError {}
