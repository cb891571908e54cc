use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::error;

/// Requests older (or further in the future) than this are rejected.
pub const MAX_CLOCK_SKEW_SECS: u64 = 300;

/// Verify an `X-Slack-Signature` header against the raw request body.
pub fn verify_slack_signature(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    signing_secret: &str,
) -> bool {
    let now_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    verify_slack_signature_at(request_body, timestamp, signature, signing_secret, now_secs)
}

/// Same as [`verify_slack_signature`] with an explicit clock.
pub fn verify_slack_signature_at(
    request_body: &str,
    timestamp: &str,
    signature: &str,
    signing_secret: &str,
    now_secs: u64,
) -> bool {
    let Ok(ts) = timestamp.parse::<u64>() else {
        error!("Invalid X-Slack-Request-Timestamp: {}", timestamp);
        return false;
    };
    if now_secs.abs_diff(ts) > MAX_CLOCK_SKEW_SECS {
        error!("Timestamp out of range, potential replay attack");
        return false;
    }

    let Some(expected) = signature
        .strip_prefix("v0=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        error!("Malformed Slack signature header");
        return false;
    };

    let Some(mac) = signing_mac(timestamp, request_body, signing_secret) else {
        return false;
    };

    if mac.verify_slice(&expected).is_ok() {
        true
    } else {
        error!("Slack signature verification failed");
        false
    }
}

pub fn compute_signature(timestamp: &str, request_body: &str, signing_secret: &str) -> String {
    match signing_mac(timestamp, request_body, signing_secret) {
        Some(mac) => format!("v0={}", hex::encode(mac.finalize().into_bytes())),
        None => String::new(),
    }
}

fn signing_mac(timestamp: &str, request_body: &str, signing_secret: &str) -> Option<Hmac<Sha256>> {
    let mut mac = match Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return None;
        }
    };
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());
    Some(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const NOW: u64 = 1_531_420_618;

    #[test]
    fn accepts_matching_signature() {
        let body = r#"{"type":"url_verification","challenge":"abc123"}"#;
        let ts = NOW.to_string();
        let sig = compute_signature(&ts, body, SECRET);
        assert!(sig.starts_with("v0="));
        assert!(verify_slack_signature_at(body, &ts, &sig, SECRET, NOW));
    }

    #[test]
    fn rejects_tampered_body() {
        let ts = NOW.to_string();
        let sig = compute_signature(&ts, "original", SECRET);
        assert!(!verify_slack_signature_at("tampered", &ts, &sig, SECRET, NOW));
    }

    #[test]
    fn rejects_stale_and_future_timestamps() {
        let body = "{}";
        let stale = (NOW - MAX_CLOCK_SKEW_SECS - 1).to_string();
        let sig = compute_signature(&stale, body, SECRET);
        assert!(!verify_slack_signature_at(body, &stale, &sig, SECRET, NOW));

        let future = (NOW + MAX_CLOCK_SKEW_SECS + 1).to_string();
        let sig = compute_signature(&future, body, SECRET);
        assert!(!verify_slack_signature_at(body, &future, &sig, SECRET, NOW));
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert!(!verify_slack_signature_at("{}", "yesterday", "v0=00", SECRET, NOW));
        assert!(!verify_slack_signature_at("{}", &NOW.to_string(), "v1=zz", SECRET, NOW));
    }
}
