use serde::Deserialize;
use serde_json::{Value, json};
use slack_morphism::{SlackChannelId, SlackTs, SlackUserId};
use std::fmt;

pub const EVENT_CALLBACK: &str = "event_callback";

/// Subtypes Slack uses to report a change to an earlier message. The changed
/// message itself sits under `event.message`.
pub const EDIT_SUBTYPES: [&str; 2] = ["message_changed", "message_deleted"];

/// The `event` object of an Events API callback, reduced to the fields the
/// relay looks at. Non-string values are treated as absent, except for the
/// `bot_id` and `edited` markers, which count whenever the key is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlackMessageEvent {
    pub event_type: Option<String>,
    pub subtype: Option<String>,
    pub channel: Option<SlackChannelId>,
    pub user: Option<SlackUserId>,
    pub text: Option<String>,
    pub ts: Option<SlackTs>,
    pub thread_ts: Option<SlackTs>,
    pub from_bot: bool,
    pub edited: bool,
}

impl SlackMessageEvent {
    #[must_use]
    pub fn from_json(event: &Value) -> Self {
        let str_field = |key: &str| {
            event
                .get(key)
                .and_then(Value::as_str)
                .map(ToString::to_string)
        };
        let nested = event.get("message").unwrap_or(&Value::Null);

        Self {
            event_type: str_field("type"),
            subtype: str_field("subtype"),
            channel: str_field("channel").map(SlackChannelId),
            user: str_field("user")
                .or_else(|| nested.get("user").and_then(Value::as_str).map(ToString::to_string))
                .map(SlackUserId),
            text: str_field("text"),
            ts: str_field("ts").map(SlackTs),
            thread_ts: str_field("thread_ts").map(SlackTs),
            from_bot: has_key(event, "bot_id") || has_key(nested, "bot_id"),
            edited: has_key(event, "edited") || has_key(nested, "edited"),
        }
    }

    /// True for edit markers and for the edit/delete notification subtypes.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        self.edited
            || self
                .subtype
                .as_deref()
                .is_some_and(|subtype| EDIT_SUBTYPES.contains(&subtype))
    }

    /// Channel id, if present and non-empty.
    #[must_use]
    pub fn channel_id(&self) -> Option<&SlackChannelId> {
        self.channel.as_ref().filter(|c| !c.0.is_empty())
    }

    /// Timestamp a reply should thread under: the parent thread when the
    /// message is already a thread reply, otherwise the message itself.
    #[must_use]
    pub fn reply_thread_ts(&self) -> Option<&SlackTs> {
        self.thread_ts
            .as_ref()
            .or(self.ts.as_ref())
            .filter(|ts| !ts.0.is_empty())
    }
}

fn has_key(value: &Value, key: &str) -> bool {
    value.get(key).is_some()
}

/// Bot credentials held in the secret store as
/// `{"SLACK_BOT_TOKEN": "...", "SLACK_BOT_USER_ID": "..."}`.
#[derive(Clone, PartialEq, Deserialize)]
pub struct Credentials {
    #[serde(rename = "SLACK_BOT_TOKEN")]
    pub bot_token: String,
    #[serde(rename = "SLACK_BOT_USER_ID")]
    pub bot_user_id: SlackUserId,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("bot_token", &"<redacted>")
            .field("bot_user_id", &self.bot_user_id.0)
            .finish()
    }
}

/// Terminal state of one processor invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorOutcome {
    IgnoredBot,
    IgnoredSelf,
    IgnoredEdit,
    MissingChannel,
    Sent,
}

impl ProcessorOutcome {
    #[must_use]
    pub fn status(self) -> &'static str {
        match self {
            ProcessorOutcome::IgnoredBot => "ignored bot message",
            ProcessorOutcome::IgnoredSelf => "ignored self message",
            ProcessorOutcome::IgnoredEdit => "ignored edited message",
            ProcessorOutcome::MissingChannel => "error",
            ProcessorOutcome::Sent => "message sent",
        }
    }

    /// Result payload returned to the Lambda runtime.
    #[must_use]
    pub fn to_json(self) -> Value {
        match self {
            ProcessorOutcome::MissingChannel => {
                json!({ "status": self.status(), "reason": "missing channel" })
            }
            _ => json!({ "status": self.status() }),
        }
    }
}
