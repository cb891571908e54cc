//! Response builders for the receiver Lambda.
//!
//! Every response is a proxy-integration object `{statusCode, body}` where
//! `body` is a string.

use serde_json::{Value, json};

/// Returns a 200 OK response with an empty JSON body.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "body": "{}" })
}

/// Returns a 200 OK response whose body is `text` verbatim.
#[must_use]
pub fn ok_text(text: &str) -> Value {
    json!({ "statusCode": 200, "body": text })
}

/// Returns a 200 OK response carrying an error indicator.
///
/// Used for malformed input: a non-2xx answer would make Slack redeliver the
/// same broken request.
#[must_use]
pub fn ok_error(message: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_error_keeps_status_200() {
        let resp = ok_error("Invalid JSON body");
        assert_eq!(resp["statusCode"], 200);
        let body: Value = serde_json::from_str(resp["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["error"], "Invalid JSON body");
    }

    #[test]
    fn ok_text_is_verbatim() {
        assert_eq!(ok_text("abc123")["body"], "abc123");
    }

    #[test]
    fn err_response_sets_status() {
        assert_eq!(err_response(401, "Invalid Slack signature")["statusCode"], 401);
    }
}
