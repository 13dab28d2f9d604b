//! Moderator response decoding.
//!
//! The moderator is a language model and therefore an unreliable source of
//! structured output. Decoding happens in two stages that both feed the same
//! validation gate:
//!
//! | Stage | Input | Example |
//! |-------|-------|---------|
//! | Strict | The whole response is one JSON object | `{"actor": "expert1", "reason": "..."}` |
//! | Recovery | First JSON object embedded in prose | `Sure! {"actor": "expert1", ...} Hope that helps` |
//!
//! Tool-call shaped payloads (`{"name": "prepare_next_actor", "arguments": {...}}`,
//! including OpenAI-style `tool_calls` with string-encoded arguments) are
//! unwrapped before the fields are read.

use serde_json::{Map, Value};

/// Keys under which tool-call payloads nest their arguments
const ARGUMENT_KEYS: [&str; 5] = ["arguments", "parameters", "args", "input", "function"];

/// Result of decoding a moderator response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDecode {
    /// Both fields were found; values are trimmed but not yet validated
    Decoded { actor: String, reason: String },
    /// No usable selection could be extracted
    Malformed(String),
}

impl SelectionDecode {
    pub fn is_decoded(&self) -> bool {
        matches!(self, SelectionDecode::Decoded { .. })
    }
}

/// Decode the moderator's answer into an `(actor, reason)` pair.
///
/// # Examples
///
/// ```
/// use panel_domain::moderator::parsing::{decode_selection, SelectionDecode};
///
/// let decoded = decode_selection(r#"Next: {"actor": "expert1", "reason": "Explain"}"#);
/// assert_eq!(
///     decoded,
///     SelectionDecode::Decoded { actor: "expert1".into(), reason: "Explain".into() }
/// );
/// assert!(!decode_selection("I think expert1 should go next").is_decoded());
/// ```
pub fn decode_selection(response: &str) -> SelectionDecode {
    let stripped = strip_code_fence(response.trim());

    // Stage 1: strict decode of the whole response
    if let Ok(value) = serde_json::from_str::<Value>(stripped) {
        return match selection_from_value(&value) {
            Ok((actor, reason)) => SelectionDecode::Decoded { actor, reason },
            Err(why) => SelectionDecode::Malformed(why),
        };
    }

    // Stage 2: first well-formed object embedded in surrounding prose
    let mut first_error = None;
    for (start, _) in response.match_indices('{') {
        let mut stream = serde_json::Deserializer::from_str(&response[start..]).into_iter::<Value>();
        let Some(Ok(value)) = stream.next() else {
            continue;
        };
        if !value.is_object() {
            continue;
        }
        match selection_from_value(&value) {
            Ok((actor, reason)) => return SelectionDecode::Decoded { actor, reason },
            Err(why) => {
                first_error.get_or_insert(why);
            }
        }
    }

    SelectionDecode::Malformed(
        first_error.unwrap_or_else(|| "no JSON object found in moderator response".to_string()),
    )
}

/// Remove a surrounding markdown code fence (```json ... ```)
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return text;
    };
    // Drop the info string (e.g. "json") on the opening line
    match body.find('\n') {
        Some(newline) => body[newline + 1..].trim(),
        None => body.trim(),
    }
}

fn selection_from_value(value: &Value) -> Result<(String, String), String> {
    match value {
        Value::Object(map) => selection_from_object(map),
        // OpenAI-style string-encoded arguments
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(inner @ Value::Object(_)) => selection_from_value(&inner),
            _ => Err("tool arguments are not a JSON object".to_string()),
        },
        Value::Array(items) => items
            .first()
            .ok_or_else(|| "empty tool call list".to_string())
            .and_then(selection_from_value),
        _ => Err("moderator response is not a JSON object".to_string()),
    }
}

fn selection_from_object(map: &Map<String, Value>) -> Result<(String, String), String> {
    if map.contains_key("actor") {
        let actor = non_empty_string(map, "actor")?;
        let reason = non_empty_string(map, "reason")?;
        return Ok((actor, reason));
    }

    if let Some(calls) = map.get("tool_calls") {
        return selection_from_value(calls);
    }

    for key in ARGUMENT_KEYS {
        if let Some(nested) = map.get(key) {
            return selection_from_value(nested);
        }
    }

    Err("missing field 'actor'".to_string())
}

fn non_empty_string(map: &Map<String, Value>, key: &str) -> Result<String, String> {
    match map.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(Value::String(_)) => Err(format!("field '{}' is empty", key)),
        Some(_) => Err(format!("field '{}' is not a string", key)),
        None => Err(format!("missing field '{}'", key)),
    }
}
