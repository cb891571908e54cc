use serde_json::json;
use slack_morphism::{SlackChannelId, SlackTs};
use slack_relay::errors::SlackError;
use slack_relay::slack::{MessagePoster, PostMessageRequest, SlackClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn threaded_request() -> PostMessageRequest {
    PostMessageRequest {
        channel: SlackChannelId("C1".to_string()),
        text: "Hello! You said: hi".to_string(),
        thread_ts: Some(SlackTs("100.1".to_string())),
    }
}

#[tokio::test]
async fn posts_json_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat.postMessage"))
        .and(header("Authorization", "Bearer xoxb-test"))
        .and(body_json(json!({
            "channel": "C1",
            "text": "Hello! You said: hi",
            "thread_ts": "100.1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "channel": "C1",
            "ts": "100.2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SlackClient::new(format!("{}/api", mock_server.uri()));
    let resp = client
        .post_message("xoxb-test", &threaded_request())
        .await
        .unwrap();

    assert_eq!(resp["ts"], "100.2");
}

#[tokio::test]
async fn ok_false_is_returned_not_raised() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat.postMessage"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": false, "error": "channel_not_found"})),
        )
        .mount(&mock_server)
        .await;

    let client = SlackClient::new(format!("{}/api", mock_server.uri()));
    let resp = client
        .post_message("xoxb-test", &threaded_request())
        .await
        .unwrap();

    assert_eq!(resp["error"], "channel_not_found");
}

#[tokio::test]
async fn http_error_status_is_raised() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat.postMessage"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = SlackClient::new(format!("{}/api", mock_server.uri()));
    let err = client
        .post_message("xoxb-test", &threaded_request())
        .await
        .unwrap_err();

    match err {
        SlackError::ApiError(msg) => assert!(msg.contains("500")),
        other => panic!("Expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    let client = SlackClient::new("http://127.0.0.1:1/api");
    let err = client
        .post_message("xoxb-test", &threaded_request())
        .await
        .unwrap_err();

    assert!(matches!(err, SlackError::HttpError(_)));
}
