//! Structured-value extraction from free-text LLM responses.
//!
//! Models are not guaranteed to emit clean JSON: payloads arrive wrapped
//! in prose, fenced blocks, or with comment annotations and trailing
//! commas. [`extract_json`] runs a fixed, ordered chain of recovery
//! strategies over the raw text and returns the first syntactically valid
//! value, tagged with the strategy that produced it.

mod clean;
mod extract;
mod scan;

pub use clean::clean_json;
pub use extract::{Extraction, Strategy, extract_json};
pub use scan::scan_balanced;
