use super::types::value_text;
use crate::excuse::{ExcuseEmail, PLACEHOLDER_SUBJECT};
use serde_json::{Map, Value};
use tracing::debug;

/// Best-effort extraction of `{subject, body}` from model output. Never fails.
///
/// Tries the whole text as JSON first, then the first embedded object that has a
/// `subject` or `body` key, and finally falls back to the raw text as the body.
pub fn extract_excuse(text: &str) -> ExcuseEmail {
    let trimmed = strip_code_fence(text.trim());

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        return from_object(&map, trimmed);
    }

    if let Some(map) = find_embedded_object(trimmed) {
        debug!("Extracted embedded JSON object from model output");
        return from_object(&map, trimmed);
    }

    debug!("Model output is not JSON, using raw text as body");
    ExcuseEmail::new(PLACEHOLDER_SUBJECT, trimmed)
}

fn from_object(map: &Map<String, Value>, raw: &str) -> ExcuseEmail {
    let subject = field_text(map, "subject")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_SUBJECT.to_string());
    let body = field_text(map, "body").unwrap_or_else(|| raw.to_string());

    ExcuseEmail { subject, body }
}

fn field_text(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_text(value)),
    }
}

fn find_embedded_object(text: &str) -> Option<Map<String, Value>> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(Value::Object(map)))
                if map.contains_key("subject") || map.contains_key("body") =>
            {
                Some(map)
            }
            _ => None,
        }
    })
}

/// Removes a surrounding Markdown code fence such as ```` ```json ... ``` ````.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(rest) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening line.
    match rest.split_once('\n') {
        Some((_, inner)) => inner.trim(),
        None => rest.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_json() {
        let email = extract_excuse(r#"{"subject": "Running late", "body": "Dear Dana,\n\nSorry."}"#);
        assert_eq!(email, ExcuseEmail::new("Running late", "Dear Dana,\n\nSorry."));
    }

    #[test]
    fn test_fenced_json() {
        let text = "```json\n{\"subject\": \"Fenced\", \"body\": \"Body\"}\n```";
        assert_eq!(extract_excuse(text), ExcuseEmail::new("Fenced", "Body"));
    }

    #[test]
    fn test_embedded_json() {
        let text = "Sure! Here is your email:\n{\"subject\": \"Embedded\", \"body\": \"Hi {name}\"}\nHope it helps.";
        assert_eq!(extract_excuse(text), ExcuseEmail::new("Embedded", "Hi {name}"));
    }

    #[test]
    fn test_embedded_skips_unrelated_objects() {
        let text = "meta {\"model\": \"x\"} then {\"subject\": \"Second\", \"body\": \"B\"}";
        assert_eq!(extract_excuse(text), ExcuseEmail::new("Second", "B"));
    }

    #[test]
    fn test_non_json_falls_back_to_raw_text() {
        let text = "  Subject: sorry\n\nI overslept.  ";
        assert_eq!(
            extract_excuse(text),
            ExcuseEmail::new(PLACEHOLDER_SUBJECT, "Subject: sorry\n\nI overslept.")
        );
    }

    #[test]
    fn test_missing_subject_uses_placeholder() {
        let email = extract_excuse(r#"{"body": "Only a body"}"#);
        assert_eq!(email, ExcuseEmail::new(PLACEHOLDER_SUBJECT, "Only a body"));
    }

    #[test]
    fn test_missing_body_uses_raw_text() {
        let raw = r#"{"subject": "Only a subject"}"#;
        assert_eq!(extract_excuse(raw), ExcuseEmail::new("Only a subject", raw));
    }

    #[test]
    fn test_non_string_fields_are_rendered() {
        let email = extract_excuse(r#"{"subject": 42, "body": ["a", "b"]}"#);
        assert_eq!(email, ExcuseEmail::new("42", r#"["a","b"]"#));
    }

    #[test]
    fn test_unbalanced_brace_falls_back() {
        let text = "Dear Dana, { I will be late";
        assert_eq!(extract_excuse(text), ExcuseEmail::new(PLACEHOLDER_SUBJECT, text));
    }
}
