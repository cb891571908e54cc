use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use slack_relay::api::dispatch::LambdaDispatcher;
use slack_relay::core::config::ReceiverConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    slack_relay::setup_logging();

    let config = ReceiverConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let dispatcher = LambdaDispatcher::from_env(config.processor_function_name.clone()).await;

    let config = &config;
    let dispatcher = &dispatcher;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        slack_relay::api::handler(config, dispatcher, event).await
    }))
    .await
}
