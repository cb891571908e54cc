use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("Failed to parse Slack event: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to access Slack API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to load Slack credentials: {0}")]
    SecretError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(error: reqwest::Error) -> Self {
        SlackError::HttpError(error.to_string())
    }
}

/// Failure while peeling the forwarded webhook envelope.
///
/// The processor payload is encoded twice: an envelope object whose `body`
/// field is a JSON string holding the actual Slack payload. Each layer gets
/// its own variant so a bad invocation can be traced to the layer that broke.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnwrapError {
    #[error("envelope stage: {0}")]
    Envelope(String),

    #[error("payload stage: {0}")]
    Payload(String),
}

impl From<UnwrapError> for SlackError {
    fn from(error: UnwrapError) -> Self {
        SlackError::ParseError(error.to_string())
    }
}
