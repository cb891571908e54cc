use std::env;

pub const DEFAULT_SLACK_API_BASE_URL: &str = "https://slack.com/api";

/// Settings for the webhook-facing Lambda.
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    pub processor_function_name: String,
    pub slack_signing_secret: Option<String>,
    pub ignore_slack_retries: bool,
}

impl ReceiverConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            processor_function_name: required(&lookup, "PROCESSOR_FUNCTION_NAME")?,
            slack_signing_secret: optional(&lookup, "SLACK_SIGNING_SECRET"),
            ignore_slack_retries: optional(&lookup, "IGNORE_SLACK_RETRIES")
                .is_some_and(|v| parse_flag(&v)),
        })
    }
}

/// Settings for the reply-posting Lambda.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub slack_secret_id: String,
    pub slack_secret_region: Option<String>,
    pub slack_api_base_url: String,
}

impl ProcessorConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            slack_secret_id: required(&lookup, "SLACK_SECRET_ID")?,
            slack_secret_region: optional(&lookup, "SLACK_SECRET_REGION"),
            slack_api_base_url: optional(&lookup, "SLACK_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_SLACK_API_BASE_URL.to_string()),
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or_else(|| format!("{key}: environment variable not set"))
}

// Blank values count as unset.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
