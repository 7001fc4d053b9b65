//! JSON boundary extraction — tolerant recovery of a JSON object from LLM
//! output that may carry incidental leading/trailing commentary.
//!
//! Used identically by the scorer, drafter, and validator: locate the first
//! `{` and the last `}` and hand the span to serde. One implementation so the
//! tolerance rules cannot drift between stages.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::errors::EngineError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no JSON object found in response")]
    NoObject,
}

/// Returns the substring spanning the first `{` through the last `}`.
///
/// Rejects text with no braces and text where the last `}` precedes the
/// first `{`. The span is not guaranteed to be valid JSON — the caller
/// decodes it and owns that failure.
pub fn extract_json_object(text: &str) -> Result<&str, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoObject)?;
    if end < start {
        return Err(ExtractError::NoObject);
    }
    Ok(&text[start..=end])
}

/// Extracts the JSON object span from raw generator output and decodes it
/// into `T`.
///
/// Failure modes stay distinct: an unextractable or syntactically invalid
/// span is a `ResponseParse` error; well-formed JSON that does not satisfy
/// `T`'s fields is a `ResponseSchema` error.
pub fn decode_object<T: DeserializeOwned>(raw: &str) -> Result<T, EngineError> {
    let span = extract_json_object(raw).map_err(|e| EngineError::ResponseParse(e.to_string()))?;
    let value: serde_json::Value = serde_json::from_str(span)
        .map_err(|e| EngineError::ResponseParse(format!("invalid JSON in response: {e}")))?;
    serde_json::from_value(value).map_err(|e| EngineError::ResponseSchema(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_bare_object_passes_through() {
        let text = r#"{"match_score": 80}"#;
        assert_eq!(extract_json_object(text).unwrap(), text);
    }

    #[test]
    fn test_noise_wrapped_object_is_extracted() {
        let text = r#"Sure! Here's the result: {"match_score": 80, "suggestions": [], "key_matches": [], "gaps": []} Hope that helps!"#;
        let span = extract_json_object(text).unwrap();
        assert!(span.starts_with('{'));
        assert!(span.ends_with('}'));
        let value: serde_json::Value = serde_json::from_str(span).unwrap();
        assert_eq!(value["match_score"], 80);
    }

    #[test]
    fn test_nested_objects_keep_outermost_braces() {
        let text = r#"prefix {"outer": {"inner": 1}} suffix"#;
        assert_eq!(
            extract_json_object(text).unwrap(),
            r#"{"outer": {"inner": 1}}"#
        );
    }

    #[test]
    fn test_no_braces_is_rejected() {
        assert_eq!(
            extract_json_object("I could not produce JSON, sorry."),
            Err(ExtractError::NoObject)
        );
    }

    #[test]
    fn test_reversed_braces_are_rejected() {
        assert_eq!(extract_json_object("} nonsense {"), Err(ExtractError::NoObject));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(extract_json_object(""), Err(ExtractError::NoObject));
    }

    #[test]
    fn test_only_opening_brace_is_rejected() {
        assert_eq!(extract_json_object("{ truncated"), Err(ExtractError::NoObject));
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        answer: String,
    }

    #[test]
    fn test_decode_object_strips_noise() {
        let payload: Payload =
            decode_object(r#"Of course: {"answer": "done"} — anything else?"#).unwrap();
        assert_eq!(payload.answer, "done");
    }

    #[test]
    fn test_decode_object_invalid_json_is_parse_error() {
        let err = decode_object::<Payload>(r#"{"answer": "unterminated}"#).unwrap_err();
        assert!(matches!(err, EngineError::ResponseParse(_)));
    }

    #[test]
    fn test_decode_object_missing_field_is_schema_error() {
        let err = decode_object::<Payload>(r#"{"something_else": 1}"#).unwrap_err();
        match err {
            EngineError::ResponseSchema(message) => assert!(message.contains("answer")),
            other => panic!("expected ResponseSchema, got {other:?}"),
        }
    }
}
