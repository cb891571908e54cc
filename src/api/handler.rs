//! Receiver Lambda handler.
//!
//! This module handles:
//! - Body decoding (base64, JSON or form-encoded)
//! - Optional request signature verification
//! - Optional suppression of Slack redeliveries
//! - Routing (delegated to `event_handler`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info};

use super::dispatch::ProcessorDispatcher;
use super::{event_handler, helpers, parsing, signature};
use crate::core::config::ReceiverConfig;

pub use self::function_handler as handler;

const RETRY_NUM_HEADER: &str = "X-Slack-Retry-Num";

/// Lambda handler for the receiver entrypoint.
///
/// # Errors
///
/// Never fails for bad input; the `Result` is what the runtime expects.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    config: &ReceiverConfig,
    dispatcher: &dyn ProcessorDispatcher,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(receive(config, dispatcher, &event.payload).await)
}

/// Turn one webhook envelope into the HTTP response for Slack, forwarding
/// to the processor when the payload calls for it.
pub async fn receive(
    config: &ReceiverConfig,
    dispatcher: &dyn ProcessorDispatcher,
    envelope: &Value,
) -> Value {
    let body = match parsing::decode_body(envelope) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to read request body: {}", e);
            return helpers::ok_error(&e.to_string());
        }
    };
    debug!(body = %body, "Receiver got request body");

    if let Some(secret) = &config.slack_signing_secret {
        if let Err(response) = verify_signature(envelope, &body, secret) {
            return response;
        }
        info!("Slack signature verified successfully");
    }

    if config.ignore_slack_retries {
        if let Some(retry_num) = parsing::envelope_header(envelope, RETRY_NUM_HEADER) {
            info!(retry_num = %retry_num, "Ignoring Slack redelivery");
            return helpers::ok_empty();
        }
    }

    let content_type = parsing::envelope_header(envelope, "Content-Type");
    let payload = match parsing::parse_payload(&body, content_type) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Failed to parse Slack payload: {}", e);
            return helpers::ok_error(&e.to_string());
        }
    };

    event_handler::handle_payload(dispatcher, envelope, &payload).await
}

fn verify_signature(envelope: &Value, body: &str, signing_secret: &str) -> Result<(), Value> {
    let Some(sig) = parsing::envelope_header(envelope, "X-Slack-Signature") else {
        error!("Missing X-Slack-Signature header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Signature header",
        ));
    };

    let Some(timestamp) = parsing::envelope_header(envelope, "X-Slack-Request-Timestamp") else {
        error!("Missing X-Slack-Request-Timestamp header");
        return Err(helpers::err_response(
            401,
            "Missing X-Slack-Request-Timestamp header",
        ));
    };

    if !signature::verify_slack_signature(body, timestamp, sig, signing_secret) {
        return Err(helpers::err_response(401, "Invalid Slack signature"));
    }

    Ok(())
}
