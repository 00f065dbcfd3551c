//! Best-effort textual repair of near-valid JSON.

use regex::Regex;
use std::sync::LazyLock;

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)//.*?$").expect("valid regex"));
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));
static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("valid regex"));

/// Repairs common LLM damage in a JSON candidate without parsing it.
///
/// Strips `//` line comments and `/* */` block comments, removes a
/// trailing comma immediately before a closing brace or bracket, and
/// trims surrounding whitespace. Comments go first so that a comma they
/// were hiding is still caught, which keeps the pass idempotent.
///
/// Best effort only: callers must still parse the result and treat
/// failure as ordinary extraction failure.
///
/// # Examples
///
/// ```
/// let cleaned = mnemon_extract::clean_json("{\"a\": 1, // note\n}");
/// assert_eq!(cleaned, "{\"a\": 1 \n}");
/// ```
pub fn clean_json(text: &str) -> String {
    let cleaned = LINE_COMMENT.replace_all(text, "");
    let cleaned = BLOCK_COMMENT.replace_all(&cleaned, "");
    let cleaned = TRAILING_COMMA.replace_all(&cleaned, "$1");
    cleaned.trim().to_string()
}
