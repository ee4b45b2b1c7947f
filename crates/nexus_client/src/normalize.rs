//! Response-shape normalization.
//!
//! The remote endpoint is only loosely specified: depending on the provider
//! behind the URL, the decoded payload may be a Groq-style `{"output": ...}`
//! mapping, an OpenAI-style `{"choices": [...]}` mapping, a flat
//! `text`/`message`/`result` mapping, a bare string, or something else
//! entirely. [`extract_display_text`] resolves all of them to a single
//! display string without the caller knowing which dialect is in play.

use nexus_core::RawResponse;
use serde_json::Value;

/// Extracts a best-effort display string from a raw response.
///
/// Recognition order (first match wins):
/// 1. `null` becomes the empty string.
/// 2. A bare string passes through verbatim.
/// 3. For a mapping: the `output` field, then the first element of a
///    non-empty `choices` sequence, then the first present of
///    `text`/`message`/`result`, then the whole mapping as pretty JSON.
/// 4. Anything else renders as pretty JSON.
///
/// Never fails: every branch produces a string, and a serialization
/// failure degrades to the value's compact form.
///
/// # Examples
///
/// ```
/// use nexus_client::extract_display_text;
/// use serde_json::json;
///
/// let raw = json!({"choices": [{"text": "hello"}]});
/// assert_eq!(extract_display_text(&raw), "hello");
/// ```
pub fn extract_display_text(raw: &RawResponse) -> String {
    match raw {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Object(map) => match_dialect(map).unwrap_or_else(|| pretty_json(raw)),
        other => pretty_json(other),
    }
}

/// Ordered dialect rules for mapping-shaped responses.
fn match_dialect(map: &serde_json::Map<String, Value>) -> Option<String> {
    if let Some(output) = map.get("output") {
        return Some(field_text(output));
    }

    if let Some(Value::Array(choices)) = map.get("choices")
        && let Some(first) = choices.first()
    {
        return Some(choice_text(first));
    }

    // Flat dialects, in fixed priority order.
    for key in ["text", "message", "result"] {
        if let Some(value) = map.get(key) {
            return Some(field_text(value));
        }
    }

    None
}

/// Text for the first element of a `choices` sequence.
fn choice_text(choice: &Value) -> String {
    match choice {
        Value::Object(fields) => ["text", "message"]
            .iter()
            .find_map(|key| fields.get(*key))
            .map(field_text)
            .unwrap_or_else(|| pretty_json(choice)),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A recognized field renders verbatim when it holds a string and as
/// pretty JSON otherwise.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => pretty_json(other),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_becomes_empty_string() {
        assert_eq!(extract_display_text(&Value::Null), "");
    }

    #[test]
    fn test_string_passes_through_verbatim() {
        let raw = json!("already text");
        assert_eq!(extract_display_text(&raw), "already text");
    }

    #[test]
    fn test_output_field_string() {
        let raw = json!({"output": "hi"});
        assert_eq!(extract_display_text(&raw), "hi");
    }

    #[test]
    fn test_output_field_object_pretty_printed() {
        let raw = json!({"output": {"a": 1}});
        let expected = serde_json::to_string_pretty(&json!({"a": 1})).unwrap();
        assert_eq!(extract_display_text(&raw), expected);
    }

    #[test]
    fn test_output_takes_precedence_over_choices() {
        let raw = json!({
            "output": "from output",
            "choices": [{"text": "from choices"}],
        });
        assert_eq!(extract_display_text(&raw), "from output");
    }

    #[test]
    fn test_choices_text_field() {
        let raw = json!({"choices": [{"text": "hello"}]});
        assert_eq!(extract_display_text(&raw), "hello");
    }

    #[test]
    fn test_choices_message_field() {
        let raw = json!({"choices": [{"message": "hi"}]});
        assert_eq!(extract_display_text(&raw), "hi");
    }

    #[test]
    fn test_choices_text_preferred_over_message() {
        let raw = json!({"choices": [{"message": "second", "text": "first"}]});
        assert_eq!(extract_display_text(&raw), "first");
    }

    #[test]
    fn test_choices_bare_mapping_pretty_printed() {
        let raw = json!({"choices": [{}]});
        assert_eq!(extract_display_text(&raw), "{}");
    }

    #[test]
    fn test_choices_first_element_wins() {
        let raw = json!({"choices": [{"text": "first"}, {"text": "second"}]});
        assert_eq!(extract_display_text(&raw), "first");
    }

    #[test]
    fn test_choices_non_mapping_element() {
        let raw = json!({"choices": ["plain"]});
        assert_eq!(extract_display_text(&raw), "plain");
    }

    #[test]
    fn test_empty_choices_falls_through_to_flat_fields() {
        let raw = json!({"choices": [], "text": "fallback"});
        assert_eq!(extract_display_text(&raw), "fallback");
    }

    #[test]
    fn test_flat_field_priority_order() {
        let raw = json!({"result": "x", "text": "y"});
        assert_eq!(extract_display_text(&raw), "y");

        let raw = json!({"result": "x", "message": "m"});
        assert_eq!(extract_display_text(&raw), "m");

        let raw = json!({"result": "x"});
        assert_eq!(extract_display_text(&raw), "x");
    }

    #[test]
    fn test_non_string_flat_field_pretty_printed() {
        let raw = json!({"text": {"nested": true}});
        let expected = serde_json::to_string_pretty(&json!({"nested": true})).unwrap();
        assert_eq!(extract_display_text(&raw), expected);
    }

    #[test]
    fn test_unrecognized_mapping_pretty_printed() {
        let raw = json!({"status": "ok", "id": 7});
        let expected = serde_json::to_string_pretty(&raw).unwrap();
        assert_eq!(extract_display_text(&raw), expected);
    }

    #[test]
    fn test_scalars_and_sequences_pretty_printed() {
        assert_eq!(extract_display_text(&json!(42)), "42");
        assert_eq!(extract_display_text(&json!(true)), "true");

        let raw = json!([1, 2]);
        let expected = serde_json::to_string_pretty(&raw).unwrap();
        assert_eq!(extract_display_text(&raw), expected);
    }

    #[test]
    fn test_non_ascii_preserved() {
        let raw = json!({"output": {"greeting": "नमस्ते"}});
        assert!(extract_display_text(&raw).contains("नमस्ते"));
    }
}
