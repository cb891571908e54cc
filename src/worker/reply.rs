use crate::core::models::SlackMessageEvent;
use crate::slack::PostMessageRequest;

pub const REPLY_PREFIX: &str = "Hello! You said: ";

#[must_use]
pub fn compose_reply_text(text: &str) -> String {
    format!("{REPLY_PREFIX}{text}")
}

/// Build the `chat.postMessage` request answering `event`.
///
/// Returns `None` when the event has no usable channel.
#[must_use]
pub fn build_reply(event: &SlackMessageEvent) -> Option<PostMessageRequest> {
    let channel = event.channel_id()?.clone();
    Some(PostMessageRequest {
        channel,
        text: compose_reply_text(event.text.as_deref().unwrap_or("")),
        thread_ts: event.reply_thread_ts().cloned(),
    })
}
