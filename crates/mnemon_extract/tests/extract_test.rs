//! Tests for the extraction strategy chain, scanner, and cleaner.

use mnemon_error::{EXCERPT_LEN, ExtractErrorKind};
use mnemon_extract::{Strategy, clean_json, extract_json, scan_balanced};
use serde_json::json;

// --- strategy chain ---

#[test]
fn valid_json_parses_directly() {
    let out = extract_json(r#"{"name": "test", "count": 3}"#).expect("should extract");
    assert_eq!(out.strategy, Strategy::Direct);
    assert_eq!(out.value, json!({"name": "test", "count": 3}));
}

#[test]
fn direct_array_parses_directly() {
    let out = extract_json("[1, 2, 3]").expect("should extract");
    assert_eq!(out.strategy, Strategy::Direct);
    assert_eq!(out.value, json!([1, 2, 3]));
}

#[test]
fn boilerplate_prefix_is_stripped_before_direct_parse() {
    let out = extract_json(r#"Here's the JSON: {"ok": true}"#).expect("should extract");
    assert_eq!(out.strategy, Strategy::Direct);
    assert_eq!(out.value, json!({"ok": true}));

    // Case-insensitive.
    let out = extract_json(r#"OUTPUT: [1]"#).expect("should extract");
    assert_eq!(out.strategy, Strategy::Direct);
}

#[test]
fn labeled_fence_is_extracted_from_surrounding_prose() {
    let text = "Sure! Here is what you asked for:\n```json\n{\"a\": 1}\n```\nLet me know if you need more.";
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::LabeledFence);
    assert_eq!(out.value, json!({"a": 1}));
}

#[test]
fn labeled_fence_interior_is_cleaned_when_needed() {
    let text = "```json\n{\"a\": 1,}\n```";
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::LabeledFence);
    assert_eq!(out.value, json!({"a": 1}));
}

#[test]
fn generic_fence_skips_a_short_label_line() {
    let text = "```javascript\n{\"b\": 2}\n```";
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::Fence);
    assert_eq!(out.value, json!({"b": 2}));
}

#[test]
fn generic_fence_without_label_works() {
    let text = "prefix\n```\n[true, false]\n```\nsuffix";
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::Fence);
    assert_eq!(out.value, json!([true, false]));
}

#[test]
fn balanced_region_is_found_inside_prose() {
    let text = r#"The result you wanted is {"x": [1, 2]} and nothing else."#;
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::Balanced);
    assert_eq!(out.value, json!({"x": [1, 2]}));
}

#[test]
fn balanced_region_failure_falls_back_to_cleaned_parse() {
    let text = r#"Take this: {"items": [1, 2,], }"#;
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::Balanced);
    assert_eq!(out.value, json!({"items": [1, 2]}));
}

#[test]
fn suffix_strategy_recovers_comment_broken_objects() {
    // The `}` inside the block comment defeats the balanced scan; only
    // cleaning the whole suffix yields a parseable object.
    let text = r#"note { "a": 1 /* } */ }"#;
    let out = extract_json(text).expect("should extract");
    assert_eq!(out.strategy, Strategy::Suffix);
    assert_eq!(out.value, json!({"a": 1}));
}

#[test]
fn empty_input_fails_immediately() {
    let err = extract_json("").expect_err("should fail");
    assert_eq!(err.kind, ExtractErrorKind::EmptyResponse);

    let err = extract_json("   \n\t  ").expect_err("should fail");
    assert_eq!(err.kind, ExtractErrorKind::EmptyResponse);
}

#[test]
fn prose_without_structure_exhausts_all_strategies() {
    let err = extract_json("I could not produce structured output, sorry.")
        .expect_err("should fail");
    assert!(matches!(err.kind, ExtractErrorKind::Exhausted { .. }));
}

#[test]
fn exhaustion_excerpt_is_bounded() {
    let long = "no structure here ".repeat(100);
    let err = extract_json(&long).expect_err("should fail");
    match err.kind {
        ExtractErrorKind::Exhausted { excerpt } => {
            assert_eq!(excerpt.chars().count(), EXCERPT_LEN);
        }
        other => panic!("unexpected kind: {:?}", other),
    }
}

// --- balanced scanner ---

#[test]
fn scanner_ignores_braces_inside_strings() {
    let region = scan_balanced(r#"{"a": "x{y}z"}"#, '{').expect("should match");
    assert_eq!(region, r#"{"a": "x{y}z"}"#);
}

#[test]
fn scanner_ignores_escaped_quotes() {
    let text = r#"{"quote": "she said \"hi}\" loudly"}"#;
    let region = scan_balanced(text, '{').expect("should match");
    assert_eq!(region, text);
}

#[test]
fn scanner_handles_nesting() {
    let region = scan_balanced(r#"pre [[1, [2]], 3] post"#, '[').expect("should match");
    assert_eq!(region, "[[1, [2]], 3]");
}

#[test]
fn scanner_stops_at_depth_zero() {
    let region = scan_balanced(r#"{"a": 1} {"b": 2}"#, '{').expect("should match");
    assert_eq!(region, r#"{"a": 1}"#);
}

#[test]
fn unbalanced_text_has_no_match() {
    assert_eq!(scan_balanced(r#"{"a": [1, 2"#, '{'), None);
    assert_eq!(scan_balanced("no brackets at all", '{'), None);
}

// --- lenient cleaner ---

#[test]
fn trailing_comma_clean_parses_to_same_value() -> anyhow::Result<()> {
    let with_comma = r#"{"a": [1, 2,],}"#;
    let without_comma = r#"{"a": [1, 2]}"#;

    let cleaned: serde_json::Value = serde_json::from_str(&clean_json(with_comma))?;
    let reference: serde_json::Value = serde_json::from_str(without_comma)?;
    assert_eq!(cleaned, reference);
    Ok(())
}

#[test]
fn comments_are_stripped() -> anyhow::Result<()> {
    let text = "{\n  \"a\": 1, // inline note\n  /* block\n  note */ \"b\": 2\n}";
    let value: serde_json::Value = serde_json::from_str(&clean_json(text))?;
    assert_eq!(value, json!({"a": 1, "b": 2}));
    Ok(())
}

#[test]
fn cleaner_is_idempotent() {
    let cases = [
        r#"{"a": 1,}"#,
        "{\"a\": 1, // note\n}",
        "/* lead */ [1, 2,]",
        r#"{"clean": true}"#,
        "",
    ];
    for case in cases {
        let once = clean_json(case);
        let twice = clean_json(&once);
        assert_eq!(once, twice, "not idempotent for {:?}", case);
    }
}

#[test]
fn clean_text_is_untouched() {
    let text = r#"{"a": [1, 2], "b": "x"}"#;
    assert_eq!(clean_json(text), text);
}
