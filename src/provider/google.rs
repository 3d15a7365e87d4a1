//! Google Gemini API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::types::{ContentPart, Role, ToolCall};

use super::http::{shared_client, status_to_error};
use super::{CompletionProvider, CompletionRequest, CompletionResponse};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GoogleProvider {
    model: String,
    api_key: String,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (used by tests against a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request_body(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut system_instruction = None;
        let mut contents = Vec::new();

        for turn in &request.turns {
            match turn.role {
                Role::System => {
                    system_instruction = Some(serde_json::json!({
                        "parts": [{"text": turn.text()}]
                    }));
                }
                Role::User => {
                    contents.push(serde_json::json!({
                        "role": "user",
                        "parts": [{"text": turn.text()}],
                    }));
                }
                Role::Assistant => {
                    let mut parts = Vec::new();
                    let text = turn.text();
                    if !text.is_empty() {
                        parts.push(serde_json::json!({"text": text}));
                    }
                    for tc in turn.tool_calls() {
                        parts.push(serde_json::json!({
                            "functionCall": {
                                "name": tc.name,
                                "args": tc.arguments,
                            }
                        }));
                    }
                    contents.push(serde_json::json!({
                        "role": "model",
                        "parts": parts,
                    }));
                }
                Role::Tool => {
                    for part in &turn.content {
                        if let ContentPart::ToolResult(tr) = part {
                            contents.push(serde_json::json!({
                                "role": "function",
                                "parts": [{
                                    "functionResponse": {
                                        "name": tr.tool_name,
                                        "response": tr.result,
                                    }
                                }]
                            }));
                        }
                    }
                }
            }
        }

        let mut body = serde_json::json!({ "contents": contents });
        let obj = body.as_object_mut().unwrap();

        if let Some(sys) = system_instruction {
            obj.insert("systemInstruction".into(), sys);
        }

        let mut gen_config = serde_json::Map::new();
        if let Some(max) = request.settings.max_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(temp) = request.settings.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if !gen_config.is_empty() {
            obj.insert(
                "generationConfig".into(),
                serde_json::Value::Object(gen_config),
            );
        }

        if let Some(ref tools) = request.tools {
            if !tools.is_empty() {
                let fn_decls: Vec<serde_json::Value> = tools
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "name": t.name,
                            "description": t.description,
                            "parameters": t.parameters,
                        })
                    })
                    .collect();
                obj.insert(
                    "tools".into(),
                    serde_json::json!([{"functionDeclarations": fn_decls}]),
                );
            }
        }

        body
    }
}

#[async_trait]
impl CompletionProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error> {
        let body = self.build_request_body(request);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, turns = request.turns.len(), "Google generateContent");

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GeminiResponse = resp.json().await?;

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::api(200, "No candidates in Gemini response"))?;

        let mut text = String::new();
        let mut tool_calls = Vec::new();

        for part in candidate.content.parts {
            if let Some(t) = part.text {
                text.push_str(&t);
            }
            if let Some(fc) = part.function_call {
                tool_calls.push(ToolCall {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: fc.name,
                    arguments: fc
                        .args
                        .unwrap_or(serde_json::Value::Object(Default::default())),
                });
            }
        }

        Ok(CompletionResponse { text, tool_calls })
    }
}

// Internal Gemini response types

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    text: Option<String>,
    function_call: Option<GeminiFunctionCall>,
}

#[derive(Deserialize)]
struct GeminiFunctionCall {
    name: String,
    args: Option<serde_json::Value>,
}
