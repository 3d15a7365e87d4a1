//! Gemini provider wire tests over a local mock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ensemble::error::Error;
use ensemble::provider::google::GoogleProvider;
use ensemble::provider::{CompletionProvider, CompletionRequest, ToolDefinition};
use ensemble::types::{CompletionSettings, Turn};

fn request_with(turns: Vec<Turn>, tools: Option<Vec<ToolDefinition>>) -> CompletionRequest {
    CompletionRequest {
        turns,
        settings: CompletionSettings::default(),
        tools,
    }
}

fn search_manifest() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: "search_information".into(),
        description: "Search for information on a given topic".into(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": { "topic": { "type": "string" } },
            "required": ["topic"],
        }),
    }]
}

#[tokio::test]
async fn parses_final_text_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello there" }] }
            }]
        })))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new("gemini-2.5-flash", "test-key").with_base_url(server.uri());
    let response = provider
        .complete(&request_with(vec![Turn::user("hi")], None))
        .await
        .unwrap();

    assert_eq!(response.text, "Hello there");
    assert!(!response.requests_tools());
}

#[tokio::test]
async fn parses_function_call_into_tool_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{
                    "functionCall": {
                        "name": "search_information",
                        "args": { "topic": "python" }
                    }
                }] }
            }]
        })))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new("gemini-2.5-flash", "test-key").with_base_url(server.uri());
    let response = provider
        .complete(&request_with(
            vec![Turn::user("research python")],
            Some(search_manifest()),
        ))
        .await
        .unwrap();

    assert!(response.requests_tools());
    assert_eq!(response.tool_calls.len(), 1);
    assert_eq!(response.tool_calls[0].name, "search_information");
    assert_eq!(response.tool_calls[0].arguments["topic"], "python");
    assert!(!response.tool_calls[0].id.is_empty());
}

#[tokio::test]
async fn request_body_maps_turns_and_manifest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new("gemini-2.5-flash", "test-key").with_base_url(server.uri());
    let turns = vec![
        Turn::system("You are a research specialist."),
        Turn::user("find things"),
        Turn::assistant("on it"),
    ];
    provider
        .complete(&request_with(turns, Some(search_manifest())))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        "You are a research specialist."
    );
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][1]["role"], "model");
    assert_eq!(
        body["tools"][0]["functionDeclarations"][0]["name"],
        "search_information"
    );
}

#[tokio::test]
async fn tool_results_map_to_function_responses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "done" }] } }]
        })))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new("gemini-2.5-flash", "test-key").with_base_url(server.uri());
    let turns = vec![
        Turn::user("go"),
        Turn::tool_result(
            "call-1",
            "search_information",
            serde_json::json!({ "findings": "data" }),
            false,
        ),
    ];
    provider.complete(&request_with(turns, None)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["contents"][1]["role"], "function");
    // Gemini correlates results by function name, not by call id.
    assert_eq!(
        body["contents"][1]["parts"][0]["functionResponse"]["name"],
        "search_information"
    );
    assert_eq!(
        body["contents"][1]["parts"][0]["functionResponse"]["response"]["findings"],
        "data"
    );
}

#[tokio::test]
async fn agent_tool_round_trip_correlates_function_response_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{
                    "functionCall": {
                        "name": "search_information",
                        "args": { "topic": "python" }
                    }
                }] }
            }]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "Python dates to 1991." }] } }]
        })))
        .mount(&server)
        .await;

    let provider = std::sync::Arc::new(
        GoogleProvider::new("gemini-2.5-flash", "test-key").with_base_url(server.uri()),
    );
    let mut agent = ensemble::agent::Agent::new(
        "ResearchAgent",
        "Research Specialist",
        "You are a research specialist.",
        provider,
    )
    .with_tool(ensemble::tools::builtin::search_information_tool());

    let reply = agent.process("Tell me about python").await.unwrap();
    assert_eq!(reply, "Python dates to 1991.");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let function_response = second["contents"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["parts"].as_array().unwrap())
        .find_map(|p| p.get("functionResponse"))
        .expect("second request carries a functionResponse part");
    assert_eq!(function_response["name"], "search_information");
}

#[tokio::test]
async fn auth_failure_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new("gemini-2.5-flash", "bad-key").with_base_url(server.uri());
    let err = provider
        .complete(&request_with(vec![Turn::user("hi")], None))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Authentication(_)));
}

#[tokio::test]
async fn server_error_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let provider = GoogleProvider::new("gemini-2.5-flash", "test-key").with_base_url(server.uri());
    let err = provider
        .complete(&request_with(vec![Turn::user("hi")], None))
        .await
        .unwrap_err();

    assert!(err.is_retryable());
}
