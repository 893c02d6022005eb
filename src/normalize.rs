//! Webhook reply normalization.
//!
//! DESIGN
//! ======
//! The workflow engine behind the webhook answers in whatever shape its last
//! node produced: plain text, a JSON string, an object keyed by one of a few
//! conventional names, or something else entirely. This module collapses all
//! of those into the single display string the widget renders. It never
//! fails; the worst case is echoing the raw body back.

use serde_json::Value;

/// Object keys checked, in order, for the reply text.
pub const REPLY_KEYS: [&str; 4] = ["data", "output", "result", "response"];

/// Reduce a raw webhook body to display text.
///
/// - not JSON (including an empty body): the raw text verbatim
/// - a JSON string: that string
/// - an object with a present [`REPLY_KEYS`] entry: that entry
/// - anything else: compact JSON of the whole value
#[must_use]
pub fn normalize_reply(raw: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };

    match &value {
        Value::String(text) => text.clone(),
        Value::Null => raw.to_string(),
        Value::Object(map) => REPLY_KEYS
            .iter()
            .find_map(|key| map.get(*key).filter(|v| is_present(v)))
            .map_or_else(|| value.to_string(), display_text),
        other => other.to_string(),
    }
}

/// Whether a keyed value counts as an answer. Empty strings, zero, `false`
/// and `null` do not.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
