//! The ordered extraction strategy chain.

use crate::{clean_json, scan_balanced};
use mnemon_error::{ExtractError, ExtractErrorKind};
use serde_json::Value;
use tracing::debug;

/// Boilerplate phrases models like to prepend to a payload.
const COMMON_PREFIXES: [&str; 7] = [
    "Here's the JSON:",
    "Here is the JSON:",
    "The JSON is:",
    "JSON:",
    "Result:",
    "Output:",
    "Answer:",
];

/// Maximum length of a label line following a generic opening fence.
const FENCE_LABEL_MAX: usize = 20;

/// Which strategy recovered the value. Useful for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Strategy {
    /// The (possibly prefix-stripped) text parsed as-is.
    #[display("direct")]
    Direct,
    /// A ```` ```json ```` fenced block held the value.
    #[display("labeled_fence")]
    LabeledFence,
    /// An unlabeled fenced block held the value.
    #[display("fence")]
    Fence,
    /// A balanced scan from the first `{` or `[` found the value.
    #[display("balanced")]
    Balanced,
    /// A cleaned suffix from the first `{` or `[` parsed.
    #[display("suffix")]
    Suffix,
}

/// A successfully recovered structured value.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The parsed value
    pub value: Value,
    /// The strategy that produced it
    pub strategy: Strategy,
}

/// Recovers a JSON value from raw model output.
///
/// Strategies run in a fixed order and the first success wins; none is
/// skipped on a heuristic. Empty or whitespace-only input fails
/// immediately, and exhaustion reports a bounded excerpt of the input.
///
/// # Errors
///
/// [`ExtractErrorKind::EmptyResponse`] for blank input,
/// [`ExtractErrorKind::Exhausted`] when every strategy fails.
///
/// # Examples
///
/// ```
/// use mnemon_extract::{Strategy, extract_json};
///
/// let out = extract_json(r#"{"answer": 42}"#).unwrap();
/// assert_eq!(out.strategy, Strategy::Direct);
/// assert_eq!(out.value["answer"], 42);
/// ```
pub fn extract_json(text: &str) -> Result<Extraction, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::new(ExtractErrorKind::EmptyResponse));
    }

    let stripped = strip_common_prefix(trimmed);

    // 1. Direct parse of the (possibly stripped) text.
    if let Ok(value) = serde_json::from_str(stripped) {
        return Ok(found(value, Strategy::Direct));
    }

    // 2. Explicitly labeled fenced block.
    if let Some(interior) = labeled_fence(stripped)
        && let Some(value) = parse_or_clean(interior)
    {
        return Ok(found(value, Strategy::LabeledFence));
    }

    // 3. Any fenced block, skipping a short label line after the fence.
    if let Some(interior) = generic_fence(stripped)
        && let Some(value) = parse_or_clean(interior)
    {
        return Ok(found(value, Strategy::Fence));
    }

    // 4. Balanced region from the first opening character.
    for open in ['{', '['] {
        if let Some(region) = scan_balanced(stripped, open)
            && let Some(value) = parse_or_clean(region)
        {
            return Ok(found(value, Strategy::Balanced));
        }
    }

    // 5. Best-effort suffix: everything from the first opener, cleaned.
    for open in ['{', '['] {
        if let Some(idx) = stripped.find(open) {
            let cleaned = clean_json(&stripped[idx..]);
            if let Ok(value) = serde_json::from_str(&cleaned) {
                return Ok(found(value, Strategy::Suffix));
            }
        }
    }

    Err(ExtractError::new(ExtractErrorKind::exhausted(trimmed)))
}

fn found(value: Value, strategy: Strategy) -> Extraction {
    debug!(%strategy, "Extraction succeeded");
    Extraction { value, strategy }
}

/// Removes one leading boilerplate phrase, case-insensitively.
fn strip_common_prefix(text: &str) -> &str {
    for prefix in COMMON_PREFIXES {
        if let Some(head) = text.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            return text[prefix.len()..].trim_start();
        }
    }
    text
}

/// Parses as-is, then parses the cleaned text on failure.
fn parse_or_clean(candidate: &str) -> Option<Value> {
    serde_json::from_str(candidate)
        .ok()
        .or_else(|| serde_json::from_str(&clean_json(candidate)).ok())
}

/// Interior of a ```` ```json ```` block, if present.
fn labeled_fence(text: &str) -> Option<&str> {
    let open = find_ignore_ascii_case(text, "```json")?;
    let start = open + "```json".len();
    let end = text[start..].find("```")? + start;
    Some(text[start..end].trim())
}

/// Interior of any fenced block, skipping a short label line.
fn generic_fence(text: &str) -> Option<&str> {
    let mut start = text.find("```")? + 3;
    if let Some(newline) = text[start..].find('\n')
        && newline < FENCE_LABEL_MAX
    {
        start += newline + 1;
    }
    let end = text[start..].find("```")? + start;
    Some(text[start..end].trim())
}

/// Byte offset of the first ASCII-case-insensitive occurrence of `needle`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
