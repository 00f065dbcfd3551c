//! Balanced bracket scanning.

/// Cursor state for one scan pass.
///
/// Depth starts at 0 and a match requires it to return to 0; a closing
/// character only decrements depth when the cursor is outside a string.
#[derive(Debug, Default)]
struct ScanState {
    depth: usize,
    in_string: bool,
    escaped: bool,
}

/// Finds the first balanced bracketed region starting at `open`.
///
/// Scans left to right from the first occurrence of `open`, returning
/// the substring that ends where nesting depth returns to zero. Bracket
/// characters inside quoted strings are inert, and a backslash escapes
/// exactly the next character, so literal braces in string values do not
/// truncate the region.
///
/// Supported opening characters are `{` and `[`.
///
/// # Examples
///
/// ```
/// let region = mnemon_extract::scan_balanced(r#"noise {"a": "x{y}z"} tail"#, '{');
/// assert_eq!(region, Some(r#"{"a": "x{y}z"}"#));
/// ```
pub fn scan_balanced(text: &str, open: char) -> Option<&str> {
    let close = match open {
        '{' => '}',
        '[' => ']',
        _ => return None,
    };

    let start = text.find(open)?;
    let mut state = ScanState::default();

    for (i, ch) in text[start..].char_indices() {
        if state.escaped {
            state.escaped = false;
            continue;
        }

        match ch {
            '\\' => state.escaped = true,
            '"' => state.in_string = !state.in_string,
            _ if state.in_string => {}
            c if c == open => state.depth += 1,
            c if c == close => {
                state.depth -= 1;
                if state.depth == 0 {
                    return Some(&text[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
