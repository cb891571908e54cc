//! Slack relay - replies in-thread to messages delivered by the Slack Events API.
//!
//! This crate implements a two-Lambda architecture:
//! 1. A Receiver Lambda that answers Slack's webhook quickly, handles the URL
//!    verification handshake, drops edited messages, and forwards event
//!    callbacks with an asynchronous Lambda invocation
//! 2. A Processor Lambda that loads bot credentials from Secrets Manager
//!    (once per warm environment), skips bot and self messages, and posts the
//!    reply with `chat.postMessage`
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution and the asynchronous hop
//! - AWS Secrets Manager for the bot token and bot user id
//! - reqwest for the Slack Web API call
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use slack_relay::core::config::ProcessorConfig;
//! use slack_relay::core::credentials::CREDENTIALS;
//! use slack_relay::core::secrets::SecretsManagerSource;
//! use slack_relay::slack::SlackClient;
//! use slack_relay::worker::Processor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     slack_relay::setup_logging();
//!
//!     let config = ProcessorConfig::from_env()?;
//!     let secrets = SecretsManagerSource::from_env(config.slack_secret_region.as_deref()).await;
//!     let poster = SlackClient::new(config.slack_api_base_url.clone());
//!     let processor = Processor::new(&CREDENTIALS, &secrets, &poster, &config.slack_secret_id);
//!
//!     let envelope = serde_json::json!({
//!         "body": r#"{"type":"event_callback","event":{"channel":"C1","text":"hi","user":"U1","ts":"100.1"}}"#
//!     });
//!     let outcome = processor.process(&envelope).await?;
//!     println!("{}", outcome.to_json());
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod slack;
pub mod worker;

pub use errors::SlackError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to `CloudWatch` Logs. The filter comes from `RUST_LOG` and
/// defaults to `info`. Calling this more than once is harmless; only the
/// first call installs a subscriber.
///
/// # Example
///
/// ```
/// slack_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
