use async_trait::async_trait;
use aws_sdk_lambda::Client as LambdaClient;
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::types::InvocationType;
use serde_json::Value;
use tracing::info;

use crate::errors::SlackError;

/// Hands an accepted event to the processor.
#[async_trait]
pub trait ProcessorDispatcher: Send + Sync {
    /// Fire-and-forget delivery of `payload`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized or the
    /// invocation request is rejected.
    async fn dispatch(&self, payload: &Value) -> Result<(), SlackError>;
}

/// Dispatches by invoking the processor Lambda with `InvocationType::Event`.
pub struct LambdaDispatcher {
    client: LambdaClient,
    function_name: String,
}

impl LambdaDispatcher {
    pub async fn from_env(function_name: String) -> Self {
        let shared = aws_config::from_env().load().await;
        Self {
            client: LambdaClient::new(&shared),
            function_name,
        }
    }
}

#[async_trait]
impl ProcessorDispatcher for LambdaDispatcher {
    async fn dispatch(&self, payload: &Value) -> Result<(), SlackError> {
        let bytes = serde_json::to_vec(payload)
            .map_err(|e| SlackError::ParseError(format!("Failed to serialize payload: {e}")))?;

        let resp = self
            .client
            .invoke()
            .function_name(&self.function_name)
            .invocation_type(InvocationType::Event)
            .payload(Blob::new(bytes))
            .send()
            .await
            .map_err(|e| SlackError::AwsError(format!("Failed to invoke processor: {e}")))?;

        info!(
            function_name = %self.function_name,
            status_code = resp.status_code(),
            "Processor triggered"
        );
        Ok(())
    }
}

/// Build the envelope forwarded to the processor: the inbound envelope with
/// `body` replaced by the decoded payload as a JSON string.
///
/// Base64 and form encodings are resolved here so the processor only ever
/// unwraps one shape.
#[must_use]
pub fn forward_envelope(envelope: &Value, payload: &Value) -> Value {
    let mut forwarded = match envelope {
        Value::Object(map) => Value::Object(map.clone()),
        _ => Value::Object(serde_json::Map::new()),
    };
    forwarded["body"] = Value::String(payload.to_string());
    forwarded["isBase64Encoded"] = Value::Bool(false);
    forwarded
}
