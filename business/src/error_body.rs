//! Turns an error response body into the message shown to the user.

use serde_json::Value;

use crate::form_config::ErrorShape;

/// Tries each shape in order and returns the first message found.
///
/// `None` means the body matched none of them and the caller should fall
/// back to its generic message.
pub fn classify(body: &[u8], shapes: &[ErrorShape]) -> Option<String> {
    let json = serde_json::from_slice::<Value>(body).ok();
    shapes
        .iter()
        .find_map(|shape| match shape {
            ErrorShape::FieldErrors => json.as_ref().and_then(field_errors),
            ErrorShape::ErrorString => json.as_ref().and_then(error_string),
            ErrorShape::PlainText => plain_text(json.as_ref(), body),
        })
}

fn field_errors(json: &Value) -> Option<String> {
    let errors = json.get("errors")?.as_object()?;
    if errors.is_empty() {
        return None;
    }
    let lines: Vec<String> = errors
        .iter()
        .map(|(field, detail)| format!("{field}: {}", render_detail(detail)))
        .collect();
    Some(lines.join("\n"))
}

fn render_detail(detail: &Value) -> String {
    match detail {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_detail)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

fn error_string(json: &Value) -> Option<String> {
    json.get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}

fn plain_text(json: Option<&Value>, body: &[u8]) -> Option<String> {
    let text = match json {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => return None,
        None => std::str::from_utf8(body).ok()?,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}
