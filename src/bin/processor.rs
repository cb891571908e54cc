use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use slack_relay::core::config::ProcessorConfig;
use slack_relay::core::credentials::CREDENTIALS;
use slack_relay::core::secrets::SecretsManagerSource;
use slack_relay::slack::SlackClient;
use slack_relay::worker::Processor;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    slack_relay::setup_logging();

    let config = ProcessorConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let secrets = SecretsManagerSource::from_env(config.slack_secret_region.as_deref()).await;
    let poster = SlackClient::new(config.slack_api_base_url.clone());
    let processor = Processor::new(&CREDENTIALS, &secrets, &poster, &config.slack_secret_id);

    let processor = &processor;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        slack_relay::worker::handler(processor, event).await
    }))
    .await
}
