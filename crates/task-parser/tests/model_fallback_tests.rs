//! Model path tests against a mock chat-completions endpoint.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use task_parser::{parse, DraftSource, ParserConfig, TaskParser, TaskPriority};

const NOTES: &str = "- Buy milk\n- Call the plumber asap";

fn parser_for(server: &MockServer) -> TaskParser {
    let config = ParserConfig::new()
        .with_api_key("sk-test")
        .with_model("gpt-4o-mini")
        .with_base_url(format!("{}/v1/chat/completions", server.uri()));
    TaskParser::from_config(config)
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "gpt-4o-mini",
        "choices": [{ "message": { "role": "assistant", "content": content } }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160 }
    }))
}

#[tokio::test]
async fn test_model_reply_is_used() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini" })))
        .respond_with(completion(
            "Here you go:\n[{\"title\": \"Buy milk\", \"description\": \"2%\", \"priority\": \"low\"}, \
             {\"title\": \"Call the plumber\", \"priority\": \"URGENT\"}]",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let parser = parser_for(&server);
    assert!(parser.uses_model());

    let outcome = parser.parse_detailed(NOTES).await;
    assert_eq!(outcome.source, DraftSource::Model);
    assert_eq!(outcome.drafts.len(), 2);
    assert_eq!(outcome.drafts[0].title, "Buy milk");
    assert_eq!(outcome.drafts[0].description, "2%");
    assert_eq!(outcome.drafts[0].priority, TaskPriority::Low);
    assert_eq!(outcome.drafts[1].description, "");
    assert_eq!(outcome.drafts[1].priority, TaskPriority::Medium);

    let usage = outcome.usage.unwrap();
    assert_eq!(usage.total_tokens, 160);
}

#[tokio::test]
async fn test_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "upstream exploded" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let parser = parser_for(&server);
    let drafts = parser.parse_with_fallback_model(NOTES).await;
    assert_eq!(drafts, parse(NOTES));
}

#[tokio::test]
async fn test_reply_without_array_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion("Sorry, I could not find any tasks in that text."))
        .mount(&server)
        .await;

    let parser = parser_for(&server);
    let outcome = parser.parse_detailed(NOTES).await;
    assert_eq!(outcome.source, DraftSource::Heuristic);
    assert_eq!(outcome.drafts, parse(NOTES));
    assert!(outcome.usage.is_none());
}

#[tokio::test]
async fn test_malformed_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let parser = parser_for(&server);
    assert_eq!(parser.parse_with_fallback_model(NOTES).await, parse(NOTES));
}

#[tokio::test]
async fn test_empty_model_array_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion("[]"))
        .mount(&server)
        .await;

    let parser = parser_for(&server);
    let outcome = parser.parse_detailed(NOTES).await;
    assert_eq!(outcome.source, DraftSource::Model);
    assert!(outcome.drafts.is_empty());
}

#[tokio::test]
async fn test_blank_text_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion("[{\"title\": \"Invented\"}]"))
        .expect(0)
        .mount(&server)
        .await;

    let parser = parser_for(&server);
    assert!(parser.parse_with_fallback_model("  \n ").await.is_empty());
    assert!(parser
        .parse_value_with_fallback_model(Some(&json!(42)))
        .await
        .is_empty());
}

#[tokio::test]
async fn test_without_credential_server_is_unused() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(completion("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let config =
        ParserConfig::new().with_base_url(format!("{}/v1/chat/completions", server.uri()));
    let parser = TaskParser::from_config(config);
    assert!(!parser.uses_model());
    assert_eq!(parser.parse_with_fallback_model(NOTES).await, parse(NOTES));
}
