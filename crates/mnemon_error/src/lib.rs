//! Error types for the Mnemon LLM resilience library.
//!
//! Each error struct pairs a domain-specific kind with the source location
//! where it was created, captured through `#[track_caller]`.

mod backend;
mod extract;

pub use backend::{BackendError, BackendErrorKind};
pub use extract::{EXCERPT_LEN, ExtractError, ExtractErrorKind};
