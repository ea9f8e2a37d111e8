//! Extraction of a JSON object from free-form model output.
//!
//! Models often wrap the requested JSON in prose or markdown fences. The
//! heuristic here takes the widest span from the first `{` to the last `}`
//! and parses it. It is best-effort: a reply holding two separate objects
//! (say, an example followed by the answer) yields a span that is not valid
//! JSON and is reported as a failure rather than guessed at.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Why no JSON object could be taken from a response.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    /// The span is not valid JSON. A valid span is always an object since it
    /// starts with `{` and ends with `}`.
    #[error("extracted text is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

static OBJECT_SPAN_REGEX: OnceLock<Regex> = OnceLock::new();

/// Return the greedy `{ ... }` span of `text`, if any.
pub fn find_object_span(text: &str) -> Option<&str> {
    let regex = OBJECT_SPAN_REGEX.get_or_init(|| Regex::new(r"(?s)\{.*\}").unwrap());
    regex.find(text).map(|m| m.as_str())
}

/// Extract and parse the JSON object embedded in `text`.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    let span = find_object_span(text).ok_or(ExtractError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Span Tests ====================

    #[test]
    fn test_span_of_bare_object() {
        assert_eq!(find_object_span(r#"{"a": "b"}"#), Some(r#"{"a": "b"}"#));
    }

    #[test]
    fn test_span_is_greedy_across_lines() {
        let text = "Here you go:\n{\n  \"a\": \"b\"\n}\nThanks {for} asking";
        assert_eq!(
            find_object_span(text),
            Some("{\n  \"a\": \"b\"\n}\nThanks {for}")
        );
    }

    #[test]
    fn test_span_missing_without_braces() {
        assert_eq!(find_object_span("I cannot translate this."), None);
    }

    #[test]
    fn test_span_missing_with_only_opening_brace() {
        assert_eq!(find_object_span("{ \"a\": \"b\""), None);
    }

    #[test]
    fn test_span_missing_when_closing_precedes_opening() {
        assert_eq!(find_object_span("} then {"), None);
    }

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_from_markdown_fence() {
        let text = "```json\n{\n  \"Send\": \"Envoyer\"\n}\n```";
        let map = extract_json_object(text).expect("Should extract");
        assert_eq!(map.get("Send"), Some(&Value::String("Envoyer".to_string())));
    }

    #[test]
    fn test_extract_preserves_key_order() {
        let map = extract_json_object(r#"{"z": "1", "a": "2", "m": "3"}"#).expect("Should extract");
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_extract_keeps_nested_braces_in_values() {
        let map = extract_json_object(r#"Result: {"Hint": "Use {name} here"}"#)
            .expect("Should extract");
        assert_eq!(map["Hint"], "Use {name} here");
    }

    #[test]
    fn test_extract_non_ascii_values() {
        let map = extract_json_object(r#"{"Send": "送信"}"#).expect("Should extract");
        assert_eq!(map["Send"], "送信");
    }

    #[test]
    fn test_extract_no_object() {
        let err = extract_json_object("Sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err, ExtractError::NoJsonObject));
    }

    #[test]
    fn test_extract_invalid_json() {
        let err = extract_json_object(r#"{"Send": "Envoyer",}"#).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidJson(_)));
    }

    #[test]
    fn test_extract_two_objects_is_a_failure() {
        let text = r#"Example: {"a": "x"} Answer: {"a": "y"}"#;
        let err = extract_json_object(text).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidJson(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExtractError::NoJsonObject.to_string(),
            "no JSON object found in response"
        );
        let invalid = extract_json_object("{oops}").unwrap_err();
        assert!(invalid
            .to_string()
            .starts_with("extracted text is not valid JSON:"));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_text_without_braces_never_extracts(text in "[^{}]*") {
            prop_assert!(matches!(
                extract_json_object(&text),
                Err(ExtractError::NoJsonObject)
            ));
        }

        #[test]
        fn prop_object_survives_surrounding_prose(
            prefix in "[a-zA-Z .:\n]{0,40}",
            suffix in "[a-zA-Z .!\n]{0,40}",
            value in "[a-zA-Z0-9 ]{0,20}",
        ) {
            let text = format!("{}{{\"key\": \"{}\"}}{}", prefix, value, suffix);
            let map = extract_json_object(&text).expect("Should extract");
            prop_assert_eq!(map.len(), 1);
            prop_assert_eq!(map["key"].as_str(), Some(value.as_str()));
        }
    }
}
