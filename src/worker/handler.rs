use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::guard::{self, LOOP_GUARD};
use super::{reply, unwrap};
use crate::core::credentials::CredentialCache;
use crate::core::models::ProcessorOutcome;
use crate::core::secrets::SecretSource;
use crate::errors::SlackError;
use crate::slack::MessagePoster;

/// Collaborators for one processor environment.
pub struct Processor<'a> {
    credentials: &'a CredentialCache,
    secrets: &'a dyn SecretSource,
    poster: &'a dyn MessagePoster,
    secret_id: &'a str,
}

impl<'a> Processor<'a> {
    #[must_use]
    pub fn new(
        credentials: &'a CredentialCache,
        secrets: &'a dyn SecretSource,
        poster: &'a dyn MessagePoster,
        secret_id: &'a str,
    ) -> Self {
        Self {
            credentials,
            secrets,
            poster,
            secret_id,
        }
    }

    /// Handle one forwarded envelope: load credentials, unwrap, apply loop
    /// protection, and post at most one reply.
    ///
    /// # Errors
    ///
    /// Credential fetch failures, unwrap failures, and send failures are
    /// returned. Discarded events are `Ok` with the matching outcome.
    pub async fn process(&self, envelope: &Value) -> Result<ProcessorOutcome, SlackError> {
        let credentials = self
            .credentials
            .get_or_fetch(self.secrets, self.secret_id)
            .await
            .inspect_err(|e| error!("Failed to load Slack credentials: {}", e))?;

        let event = unwrap::unwrap_event(envelope).map_err(|e| {
            error!("Failed to unwrap forwarded payload: {}", e);
            SlackError::from(e)
        })?;
        info!(
            event_type = event.event_type.as_deref().unwrap_or(""),
            subtype = event.subtype.as_deref().unwrap_or(""),
            "Processing Slack event"
        );

        if let Some(rule) = guard::first_discard(&LOOP_GUARD, &event, credentials) {
            info!(rule = rule.name, "Discarding event without replying");
            return Ok(rule.outcome);
        }

        let Some(request) = reply::build_reply(&event) else {
            warn!("No channel found in event");
            return Ok(ProcessorOutcome::MissingChannel);
        };

        self.poster
            .post_message(&credentials.bot_token, &request)
            .await
            .inspect_err(|e| {
                error!(channel = %request.channel.0, "Error sending message to Slack: {}", e);
            })?;

        info!(channel = %request.channel.0, "Reply sent");
        Ok(ProcessorOutcome::Sent)
    }
}

/// Lambda handler for the processor entrypoint.
///
/// # Errors
///
/// Returns an error when credentials cannot be loaded, the payload cannot be
/// unwrapped, or the reply cannot be sent; the platform decides on retries.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    processor: &Processor<'_>,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    info!("Processor received payload: {}", event.payload);

    let outcome = processor.process(&event.payload).await.map_err(Error::from)?;
    Ok(outcome.to_json())
}

pub use self::function_handler as handler;
