use std::error::Error;
use slack_relay::errors::{SlackError, UnwrapError};

#[test]
fn test_slack_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = SlackError::ParseError("test error".to_string());
    assert_error(&error);
    assert_error(&UnwrapError::Envelope("missing body field".to_string()));
}

#[test]
fn test_slack_error_display() {
    let error = SlackError::ApiError("chat.postMessage HTTP 500".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access Slack API: chat.postMessage HTTP 500"
    );

    let error = SlackError::SecretError("SLACK_BOT_TOKEN is empty".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to load Slack credentials: SLACK_BOT_TOKEN is empty"
    );

    let error = SlackError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_unwrap_error_names_its_stage() {
    let envelope = UnwrapError::Envelope("missing body field".to_string());
    let payload = UnwrapError::Payload("body is not valid JSON".to_string());

    assert!(envelope.to_string().starts_with("envelope stage"));
    assert!(payload.to_string().starts_with("payload stage"));

    match SlackError::from(payload) {
        SlackError::ParseError(msg) => assert!(msg.contains("payload stage")),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_slack_error_from_conversions() {
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SlackError {
        SlackError::from(err)
    }
}
