//! Slack Web API client module
//!
//! Only `chat.postMessage` is needed. Calls are made once; failures are
//! returned to the caller without retrying.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use slack_morphism::{SlackChannelId, SlackTs};
use std::time::Duration;
use tracing::{error, info, warn};

use super::MessagePoster;
use crate::core::config::DEFAULT_SLACK_API_BASE_URL;
use crate::errors::SlackError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body for `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMessageRequest {
    pub channel: SlackChannelId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<SlackTs>,
}

/// Slack Web API client bound to an API base URL.
///
/// Holds its own connection pool; build one per environment and reuse it
/// across invocations.
pub struct SlackClient {
    api_base_url: String,
    http: Client,
}

impl SlackClient {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build Slack HTTP client, using defaults without timeout: {}", e);
                Client::new()
            });

        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base_url)
    }
}

impl Default for SlackClient {
    fn default() -> Self {
        Self::new(DEFAULT_SLACK_API_BASE_URL)
    }
}

#[async_trait]
impl MessagePoster for SlackClient {
    async fn post_message(
        &self,
        token: &str,
        request: &PostMessageRequest,
    ) -> Result<Value, SlackError> {
        let resp = self
            .http
            .post(self.method_url("chat.postMessage"))
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Error sending message to Slack: {}", e);
                SlackError::HttpError(format!("chat.postMessage request failed: {e}"))
            })?;

        let status = resp.status();
        let raw = resp.text().await.map_err(|e| {
            error!("Error reading Slack response: {}", e);
            SlackError::HttpError(format!("chat.postMessage response read failed: {e}"))
        })?;

        if !status.is_success() {
            error!(http_status = %status, body = %raw, "chat.postMessage failed");
            return Err(SlackError::ApiError(format!("chat.postMessage HTTP {status}")));
        }

        let body: Value = serde_json::from_str(&raw).unwrap_or_else(|_| Value::String(raw));
        info!(response = %body, "Slack response");

        if body.get("ok").and_then(Value::as_bool) == Some(false) {
            let slack_error = body
                .get("error")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown");
            warn!(slack_error = %slack_error, "chat.postMessage returned ok=false");
        }

        Ok(body)
    }
}
