use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Map, Value};

use crate::SlackError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Header lookup on a proxy envelope; `None` when there are no headers.
pub fn envelope_header<'a>(envelope: &'a Value, name: &str) -> Option<&'a str> {
    envelope
        .get("headers")
        .and_then(|headers| get_header_value(headers, name))
}

/// Pull the raw request body out of a proxy envelope, base64-decoding it
/// when the platform flagged it as binary.
///
/// # Errors
///
/// Returns `ParseError` if `body` is absent, not a string, or not valid
/// base64/UTF-8 when flagged as encoded.
pub fn decode_body(envelope: &Value) -> Result<String, SlackError> {
    let Some(body) = envelope.get("body") else {
        return Err(SlackError::ParseError("Missing body".to_string()));
    };
    let Some(body) = body.as_str() else {
        return Err(SlackError::ParseError("Invalid body format".to_string()));
    };

    let is_base64 = envelope
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = BASE64
        .decode(body.trim())
        .map_err(|e| SlackError::ParseError(format!("Failed to decode base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| SlackError::ParseError(format!("Body is not valid UTF-8: {e}")))
}

/// Whether the body should be read as `application/x-www-form-urlencoded`.
///
/// The content type decides when present; otherwise anything that does not
/// look like a JSON object is treated as form data.
#[must_use]
pub fn is_form_encoded(content_type: Option<&str>, body: &str) -> bool {
    match content_type {
        Some(ct) if ct.to_ascii_lowercase().contains(FORM_CONTENT_TYPE) => true,
        Some(ct) if ct.to_ascii_lowercase().contains("json") => false,
        _ => !body.trim_start().starts_with('{'),
    }
}

/// Decode a form body into a JSON object.
///
/// A `payload` field carrying JSON (interactive callbacks) becomes the
/// result; otherwise every field becomes a string member.
///
/// # Errors
///
/// Returns `ParseError` if the body has no fields or `payload` is not JSON.
pub fn parse_form_payload(body: &str) -> Result<Value, SlackError> {
    let mut fields = Map::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        if key == "payload" {
            return serde_json::from_str(&value)
                .map_err(|e| SlackError::ParseError(format!("Invalid JSON payload: {e}")));
        }
        fields.insert(key.into_owned(), Value::String(value.into_owned()));
    }

    if fields.is_empty() {
        return Err(SlackError::ParseError("Empty form body".to_string()));
    }
    Ok(Value::Object(fields))
}

/// Parse a decoded request body into the Slack payload object.
///
/// # Errors
///
/// Returns `ParseError` if the body is neither a JSON object nor usable
/// form data.
pub fn parse_payload(body: &str, content_type: Option<&str>) -> Result<Value, SlackError> {
    if is_form_encoded(content_type, body) {
        return parse_form_payload(body);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| SlackError::ParseError(format!("Invalid JSON body: {e}")))?;
    if !value.is_object() {
        return Err(SlackError::ParseError(
            "JSON body is not an object".to_string(),
        ));
    }
    Ok(value)
}
