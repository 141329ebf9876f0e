use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for a model-serving invocation in `dataframe_records` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub dataframe_records: Vec<DataframeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataframeRecord {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

impl InvocationRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            dataframe_records: vec![DataframeRecord {
                messages: vec![ChatMessage::user(prompt)],
            }],
        }
    }
}

/// Pulls the generated text out of an invocation response.
///
/// Understands `predictions` (with `candidates`, `content` or `text` entries) and
/// OpenAI-style `choices`. Returns `None` when neither is present.
pub fn completion_text(response: &Value) -> Option<String> {
    if let Some(prediction) = response
        .get("predictions")
        .and_then(Value::as_array)
        .and_then(|p| p.first())
    {
        return Some(prediction_text(prediction));
    }

    response
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|c| c.first())
        .and_then(|choice| choice.pointer("/message/content"))
        .map(message_content)
}

fn prediction_text(prediction: &Value) -> String {
    match prediction {
        Value::Object(map) => {
            if let Some(candidates) = map.get("candidates") {
                if let Some(content) = candidates.pointer("/0/message/content") {
                    return message_content(content);
                }
            }
            if let Some(content) = map.get("content") {
                return message_content(content);
            }
            if let Some(text) = map.get("text") {
                return value_text(text);
            }
            prediction.to_string()
        }
        other => value_text(other),
    }
}

/// Message content may be a plain string or a list of typed blocks
/// (`reasoning`, `text`, ...); only the `text` blocks carry the answer.
fn message_content(content: &Value) -> String {
    let Some(blocks) = content.as_array() else {
        return value_text(content);
    };

    let texts: Vec<&str> = blocks
        .iter()
        .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect();

    if texts.is_empty() {
        value_text(content)
    } else {
        texts.concat()
    }
}

/// Strings are returned as-is, anything else in its JSON form.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
