//! Routing for decoded Slack payloads.
//!
//! Decides between the URL-verification echo, dropping edited messages, and
//! forwarding event callbacks to the processor. Every path answers 200.

use serde_json::Value;
use tracing::{debug, error, info};

use super::dispatch::{ProcessorDispatcher, forward_envelope};
use super::helpers::{ok_empty, ok_text};
use super::parsing::{v_path, v_str};
use crate::core::models::{EVENT_CALLBACK, SlackMessageEvent};

/// What the receiver does with a decoded payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverAction {
    /// Echo the handshake token.
    Challenge(String),
    /// Event callback for an edited message; acknowledged, not forwarded.
    DiscardEdited,
    /// Event callback handed to the processor.
    Forward,
    /// Anything else; acknowledged only.
    Acknowledge,
}

#[must_use]
pub fn classify(payload: &Value) -> ReceiverAction {
    if let Some(challenge) = payload.get("challenge").filter(|c| !c.is_null()) {
        let token = challenge
            .as_str()
            .map_or_else(|| challenge.to_string(), ToString::to_string);
        return ReceiverAction::Challenge(token);
    }

    if v_str(payload, &["type"]) != Some(EVENT_CALLBACK) {
        return ReceiverAction::Acknowledge;
    }

    let is_edit = v_path(payload, &["event"])
        .map(SlackMessageEvent::from_json)
        .is_some_and(|event| event.is_edit());
    if is_edit {
        return ReceiverAction::DiscardEdited;
    }

    ReceiverAction::Forward
}

/// Act on a decoded payload and build the response for Slack.
///
/// Dispatch failures are logged and otherwise ignored.
pub async fn handle_payload(
    dispatcher: &dyn ProcessorDispatcher,
    envelope: &Value,
    payload: &Value,
) -> Value {
    match classify(payload) {
        ReceiverAction::Challenge(token) => {
            info!("Answering URL verification challenge");
            ok_text(&token)
        }
        ReceiverAction::DiscardEdited => {
            info!("Ignoring edited message event");
            ok_empty()
        }
        ReceiverAction::Forward => {
            let event_type = v_str(payload, &["event", "type"]).unwrap_or("");
            info!(event_type = %event_type, "Forwarding event callback to processor");
            if let Err(e) = dispatcher.dispatch(&forward_envelope(envelope, payload)).await {
                error!("Failed to trigger processor: {}", e);
            }
            ok_empty()
        }
        ReceiverAction::Acknowledge => {
            let payload_type = v_str(payload, &["type"]).unwrap_or("");
            let text = v_str(payload, &["text"]).unwrap_or("");
            info!(payload_type = %payload_type, "Acknowledging payload without forwarding");
            debug!(text = %text, "Acknowledged payload text");
            ok_empty()
        }
    }
}
