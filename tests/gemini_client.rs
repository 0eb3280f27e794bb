use prreviewer::application::config::LlmConfig;
use prreviewer::application::ports::{CompletionRequest, LlmClient};
use prreviewer::infrastructure::providers::GeminiClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, credential: &str) -> GeminiClient {
    GeminiClient::from_config(&LlmConfig {
        model: Some("gemini-test".to_string()),
        api_key: Some(credential.to_string()),
        api_key_source: Some("env:GEMINI_API_KEY".to_string()),
        api_base: server.uri(),
        timeout_secs: 5,
        ca_cert_path: None,
    })
    .unwrap()
}

fn review_request(prompt: &str) -> CompletionRequest {
    CompletionRequest {
        prompt: prompt.to_string(),
        temperature: 0.0,
    }
}

#[tokio::test]
async fn api_key_goes_in_query_and_text_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(query_param("key", "AIzaTestKey"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Review: x=1" }] }],
            "generationConfig": { "temperature": 0.0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "## Critical\n" }, { "text": "none\n" }]
                },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "AIzaTestKey");
    let text = client.complete(&review_request("Review: x=1")).await.unwrap();
    assert_eq!(text, "## Critical\nnone\n");
}

#[tokio::test]
async fn oauth_token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("authorization", "Bearer ya29.token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "ya29.token");
    assert_eq!(client.complete(&review_request("p")).await.unwrap(), "ok");
}

#[tokio::test]
async fn error_status_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let client = client_for(&server, "AIzaTestKey");
    let err = client.complete(&review_request("p")).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("429"), "{message}");
    assert!(message.contains("quota exceeded"), "{message}");
}

#[tokio::test]
async fn blocked_response_is_an_error_with_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [],
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "AIzaTestKey");
    let err = client.complete(&review_request("p")).await.unwrap_err();
    assert!(err.to_string().contains("SAFETY"), "{err}");
}

#[tokio::test]
async fn invalid_json_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, "AIzaTestKey");
    let err = client.complete(&review_request("p")).await.unwrap_err();
    assert!(format!("{err:#}").contains("invalid JSON"), "{err:#}");
}

#[tokio::test]
async fn whitespace_only_reply_is_returned_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "\n" }] }, "finishReason": "STOP" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "AIzaTestKey");
    assert_eq!(client.complete(&review_request("p")).await.unwrap(), "\n");
}
