// src/shared/api/response.rs
use serde_json::Value;

/// Strips the `{ success, data }` envelope when present; bare arrays and
/// objects come back unchanged.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("success") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// A 2xx reply can still carry `{ "success": false }`; returns its message.
///
/// `error` may be a `{ code, message }` object, a bare string, or absent with
/// a top-level `message`.
pub fn rejection_message(value: &Value) -> Option<String> {
    let map = value.as_object()?;
    if map.get("success").and_then(Value::as_bool) != Some(false) {
        return None;
    }

    let text = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let detail = match map.get("error") {
        Some(Value::Object(error)) => match (text(error.get("code")), text(error.get("message"))) {
            (Some(code), Some(message)) => Some(format!("{}: {}", code, message)),
            (code, message) => message.or(code),
        },
        other => text(other),
    };

    Some(
        detail
            .or_else(|| text(map.get("message")))
            .unwrap_or_else(|| "request rejected".to_string()),
    )
}
