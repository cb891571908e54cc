use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use tracing::info;

use super::models::Credentials;
use crate::errors::SlackError;

/// Where bot credentials come from.
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the secret cannot be read or does not hold both
    /// `SLACK_BOT_TOKEN` and `SLACK_BOT_USER_ID`.
    async fn fetch_credentials(&self, secret_id: &str) -> Result<Credentials, SlackError>;
}

/// AWS Secrets Manager backed [`SecretSource`].
pub struct SecretsManagerSource {
    client: SecretsManagerClient,
}

impl SecretsManagerSource {
    pub async fn from_env(region: Option<&str>) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region.to_string()));
        }
        let shared = loader.load().await;

        Self {
            client: SecretsManagerClient::new(&shared),
        }
    }
}

#[async_trait]
impl SecretSource for SecretsManagerSource {
    async fn fetch_credentials(&self, secret_id: &str) -> Result<Credentials, SlackError> {
        info!(secret_id = %secret_id, "Fetching Slack credentials from Secrets Manager");

        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| SlackError::AwsError(format!("secretsmanager get_secret_value: {e}")))?;

        let Some(secret_string) = resp.secret_string() else {
            return Err(SlackError::SecretError(format!(
                "secret {secret_id} has no string value"
            )));
        };

        parse_credentials(secret_string)
    }
}

/// Parse the JSON secret body into [`Credentials`].
///
/// # Errors
///
/// Returns `SecretError` if the body is not JSON, either key is missing, or
/// either value is blank.
pub fn parse_credentials(secret_string: &str) -> Result<Credentials, SlackError> {
    let credentials: Credentials = serde_json::from_str(secret_string)
        .map_err(|e| SlackError::SecretError(format!("secret parse: {e}")))?;

    if credentials.bot_token.trim().is_empty() {
        return Err(SlackError::SecretError(
            "SLACK_BOT_TOKEN is empty".to_string(),
        ));
    }
    if credentials.bot_user_id.0.trim().is_empty() {
        return Err(SlackError::SecretError(
            "SLACK_BOT_USER_ID is empty".to_string(),
        ));
    }

    Ok(credentials)
}
