use std::time::Duration;

use depot_engine::{
    ChatCompletionsClient, RecognitionError, RecognitionService, RecognitionSettings,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> RecognitionSettings {
    RecognitionSettings {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        request_timeout: Duration::from_secs(2),
        ..RecognitionSettings::default()
    }
}

fn chat_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    }))
}

#[tokio::test]
async fn text_call_posts_chat_completions_and_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "THUDM/GLM-4-9B-0414",
            "stream": false,
            "max_tokens": 256,
        })))
        .respond_with(chat_reply("[菜鸟驿站]（12-3-4567）"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatCompletionsClient::new(settings(&server)).expect("client");
    let content = client.classify_text("12-3-4567").await.expect("content");
    assert_eq!(content, "[菜鸟驿站]（12-3-4567）");
}

#[tokio::test]
async fn image_call_uses_the_vision_model_with_low_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({
            "model": "Qwen/Qwen2.5-VL-32B-Instruct",
        })))
        .respond_with(chat_reply("[顺丰快递]（9-1-0001）"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ChatCompletionsClient::new(settings(&server)).expect("client");
    let content = client
        .classify_image(&[0xFF, 0xD8, 0xFF])
        .await
        .expect("content");
    assert_eq!(content, "[顺丰快递]（9-1-0001）");

    let requests = server.received_requests().await.expect("requests");
    let body: serde_json::Value = requests[0].body_json().expect("json body");
    let image_part = &body["messages"][1]["content"][0]["image_url"];
    assert_eq!(image_part["detail"], "low");
    let url = image_part["url"].as_str().expect("data url");
    assert!(url.starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = ChatCompletionsClient::new(settings(&server)).expect("client");
    let err = client.classify_text("x").await.expect_err("transport error");
    match err {
        RecognitionError::Transport { status, .. } => assert_eq!(status, Some(502)),
    }
}

#[tokio::test]
async fn missing_content_field_yields_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = ChatCompletionsClient::new(settings(&server)).expect("client");
    let content = client.classify_text("x").await.expect("content");
    assert!(content.is_empty());
}
