use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use rn_ai_optimize::enums::ai_provider_error::AiProviderError;
use rn_ai_optimize::errors::OptimizeError;
use rn_ai_optimize::services::ai_providers::openai::OpenAIProvider;
use rn_ai_optimize::traits::ai_provider::AiProvider;

fn completion(content: Value) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }]
    })
}

async fn provider_for(server: &MockServer) -> OpenAIProvider {
    OpenAIProvider::new("sk-test".to_string())
        .with_model("gpt-4o".to_string())
        .with_base_url(format!("{}/v1/", server.uri()))
}

#[tokio::test]
async fn returns_first_choice_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4o", "messages": [{ "role": "user", "content": "review this" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("## Review"))))
        .expect(1)
        .mount(&server)
        .await;

    let reply = provider_for(&server).await.chat("review this".to_string()).await.unwrap();

    assert_eq!(reply, "## Review");
}

#[tokio::test]
async fn sends_fixed_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(json!("ok"))))
        .mount(&server)
        .await;

    provider_for(&server).await.chat("hi".to_string()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!((body["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    assert_eq!(body["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_content_uses_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(Value::Null)))
        .mount(&server)
        .await;

    let reply = provider_for(&server).await.chat("hi".to_string()).await.unwrap();

    assert_eq!(reply, "No response from AI.");
}

#[tokio::test]
async fn empty_choices_use_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let reply = provider_for(&server).await.chat("hi".to_string()).await.unwrap();

    assert_eq!(reply, "No response from AI.");
}

#[tokio::test]
async fn unauthorized_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
        })))
        .mount(&server)
        .await;

    let error = provider_for(&server).await.chat("hi".to_string()).await.unwrap_err();

    match &error {
        AiProviderError::AuthenticationError(message) => assert!(message.contains("Incorrect API key")),
        other => panic!("unexpected error {:?}", other),
    }
    assert!(matches!(OptimizeError::from(error), OptimizeError::ApiError { .. }));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let error = provider_for(&server).await.chat("hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::RateLimited(ref message) if message == "slow down"));
}

#[tokio::test]
async fn server_error_keeps_status_in_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let error = provider_for(&server).await.chat("hi".to_string()).await.unwrap_err();

    match error {
        AiProviderError::ApiError(message) => {
            assert!(message.contains("503"));
            assert!(message.contains("maintenance"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let provider = OpenAIProvider::new("sk-test".to_string()).with_base_url("http://127.0.0.1:9".to_string());

    let error = provider.chat("hi".to_string()).await.unwrap_err();

    assert!(matches!(error, AiProviderError::NetworkError(_)));
}
