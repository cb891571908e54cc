//! Loop protection: messages from bots, including this one, are never
//! answered, and neither are edit or delete notifications. Rules run in
//! order and the first match decides.

use crate::core::models::{Credentials, ProcessorOutcome, SlackMessageEvent};

/// One discard predicate and the outcome it produces.
pub struct DiscardRule {
    pub name: &'static str,
    pub applies: fn(&SlackMessageEvent, &Credentials) -> bool,
    pub outcome: ProcessorOutcome,
}

pub static LOOP_GUARD: [DiscardRule; 3] = [
    DiscardRule {
        name: "bot_message",
        applies: is_bot_message,
        outcome: ProcessorOutcome::IgnoredBot,
    },
    DiscardRule {
        name: "self_message",
        applies: is_self_message,
        outcome: ProcessorOutcome::IgnoredSelf,
    },
    DiscardRule {
        name: "edited_message",
        applies: is_edited_message,
        outcome: ProcessorOutcome::IgnoredEdit,
    },
];

#[must_use]
pub fn is_bot_message(event: &SlackMessageEvent, _credentials: &Credentials) -> bool {
    event.from_bot
}

#[must_use]
pub fn is_self_message(event: &SlackMessageEvent, credentials: &Credentials) -> bool {
    event
        .user
        .as_ref()
        .is_some_and(|user| *user == credentials.bot_user_id)
}

#[must_use]
pub fn is_edited_message(event: &SlackMessageEvent, _credentials: &Credentials) -> bool {
    event.is_edit()
}

/// First rule that discards `event`, if any.
#[must_use]
pub fn first_discard<'a>(
    rules: &'a [DiscardRule],
    event: &SlackMessageEvent,
    credentials: &Credentials,
) -> Option<&'a DiscardRule> {
    rules.iter().find(|rule| (rule.applies)(event, credentials))
}
