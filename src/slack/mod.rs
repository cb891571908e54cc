//! All Slack-specific functionality

pub mod client;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::SlackError;

pub use client::{PostMessageRequest, SlackClient};

/// Outbound message sink. Implemented by [`SlackClient`]; tests substitute
/// an in-memory recorder.
#[async_trait]
pub trait MessagePoster: Send + Sync {
    /// Post `request` with `token` as the bearer credential and return the
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx HTTP status.
    async fn post_message(
        &self,
        token: &str,
        request: &PostMessageRequest,
    ) -> Result<Value, SlackError>;
}
