//! First-JSON-object extraction from free-form model text.
//!
//! Generative replies tend to wrap their JSON in prose or markdown fences.
//! This scanner returns the first balanced top-level object, tracking string
//! and escape state so braces inside string values do not miscount.

/// Extract the first balanced JSON object from `text`.
///
/// Scans to the first `{`, then walks forward tracking brace depth, string
/// state and escapes, returning the slice where the braces balance. A
/// candidate that never closes (for example an opening brace inside an
/// unterminated string) is skipped and the scan resumes at the next `{`.
///
/// The result is balanced, not guaranteed valid JSON; callers parse it and
/// treat a parse failure like a missing object.
pub fn first_json_object(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find('{') {
        let open = search_from + rel;
        if let Some(len) = balanced_span(&text.as_bytes()[open..]) {
            return Some(&text[open..open + len]);
        }
        search_from = open + 1;
    }
    None
}

/// Length of the balanced object starting at `bytes[0]` (an opening brace),
/// or `None` if it never closes.
///
/// Byte-wise scanning is UTF-8 safe here: the structural bytes tracked are
/// all ASCII and never occur inside a multi-byte sequence.
fn balanced_span(bytes: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_object() {
        assert_eq!(first_json_object(r#"{"a": 1}"#), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn object_with_surrounding_prose() {
        let text = r#"Here is the diagnosis: {"Crop": "Apple"} hope that helps."#;
        assert_eq!(first_json_object(text), Some(r#"{"Crop": "Apple"}"#));
    }

    #[test]
    fn markdown_fenced_reply() {
        let text = "```json\n{\n  \"Crop\": \"Tomato\",\n  \"Disease\": \"Leaf Mold\"\n}\n```";
        let obj = first_json_object(text).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(obj).unwrap();
        assert_eq!(parsed["Crop"], "Tomato");
    }

    #[test]
    fn nested_objects_balance() {
        let text = r#"outer {"a": {"b": {"c": 1}}, "d": 2} trailing"#;
        assert_eq!(
            first_json_object(text),
            Some(r#"{"a": {"b": {"c": 1}}, "d": 2}"#)
        );
    }

    #[test]
    fn braces_inside_strings_do_not_count() {
        let text = r#"{"note": "use {curly} braces", "n": 1}"#;
        assert_eq!(first_json_object(text), Some(text));
    }

    #[test]
    fn escaped_quotes_inside_strings() {
        let text = r#"{"note": "she said \"hi{\" loudly"}"#;
        assert_eq!(first_json_object(text), Some(text));
    }

    #[test]
    fn arrays_of_objects_balance() {
        let text = r#"{"Cause": [{"k": "v"}, {"k2": "v2"}]}"#;
        assert_eq!(first_json_object(text), Some(text));
    }

    #[test]
    fn no_object_in_text() {
        assert_eq!(first_json_object("no json here"), None);
        assert_eq!(first_json_object(""), None);
    }

    #[test]
    fn unclosed_object_is_skipped() {
        // The first candidate never closes; the later complete object wins.
        let text = r#"{"broken": "never ends... {"x": 1}"#;
        assert_eq!(first_json_object(text), Some(r#"{"x": 1}"#));
    }

    #[test]
    fn unclosed_object_alone_yields_none() {
        assert_eq!(first_json_object(r#"{"a": 1"#), None);
    }

    #[test]
    fn first_of_multiple_objects_wins() {
        let text = r#"{"first": 1} and {"second": 2}"#;
        assert_eq!(first_json_object(text), Some(r#"{"first": 1}"#));
    }

    #[test]
    fn non_ascii_text_around_object() {
        let text = "détails → {\"Crop\": \"Café\"} ← voilà";
        assert_eq!(first_json_object(text), Some("{\"Crop\": \"Café\"}"));
    }

    #[test]
    fn extracted_slice_parses_as_report() {
        let text = "Sure! ```json\n{\"Crop\": \"Grape\", \"Disease\": \"Black Rot\", \
                    \"Cause\": \"Guignardia bidwellii\"}\n``` Let me know if you need more.";
        let obj = first_json_object(text).unwrap();
        let fields: crate::report::ReportFields = serde_json::from_str(obj).unwrap();
        assert_eq!(fields.crop.as_deref(), Some("Grape"));
        assert_eq!(fields.cause, Some(vec!["Guignardia bidwellii".to_string()]));
    }
}
