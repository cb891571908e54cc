//! Two-stage decoding of the forwarded webhook envelope.
//!
//! Stage 1 takes the envelope object and yields its `body` string. Stage 2
//! parses that string as the Slack payload and pulls out `event`.

use serde_json::Value;

use crate::core::models::SlackMessageEvent;
use crate::errors::UnwrapError;

/// Stage 1: envelope → `body` string.
///
/// # Errors
///
/// `UnwrapError::Envelope` if the envelope is not an object or has no
/// string `body`.
pub fn envelope_body(envelope: &Value) -> Result<&str, UnwrapError> {
    let Some(map) = envelope.as_object() else {
        return Err(UnwrapError::Envelope("envelope is not an object".to_string()));
    };
    match map.get("body") {
        None => Err(UnwrapError::Envelope("missing body field".to_string())),
        Some(Value::String(body)) => Ok(body),
        Some(_) => Err(UnwrapError::Envelope("body is not a string".to_string())),
    }
}

/// Stage 2: `body` string → Slack payload object.
///
/// # Errors
///
/// `UnwrapError::Payload` if the body is not JSON or not an object.
pub fn decode_payload(body: &str) -> Result<Value, UnwrapError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| UnwrapError::Payload(format!("body is not valid JSON: {e}")))?;
    if !payload.is_object() {
        return Err(UnwrapError::Payload("payload is not an object".to_string()));
    }
    Ok(payload)
}

/// Run both stages and extract the inner event.
///
/// # Errors
///
/// Propagates the failing stage; a payload without an `event` object is a
/// `Payload` error.
pub fn unwrap_event(envelope: &Value) -> Result<SlackMessageEvent, UnwrapError> {
    let payload = decode_payload(envelope_body(envelope)?)?;
    match payload.get("event") {
        Some(event) if event.is_object() => Ok(SlackMessageEvent::from_json(event)),
        _ => Err(UnwrapError::Payload("payload has no event object".to_string())),
    }
}
