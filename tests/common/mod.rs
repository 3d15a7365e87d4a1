//! Shared test support: a scripted completion provider.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use ensemble::error::Error;
use ensemble::provider::{CompletionProvider, CompletionRequest, CompletionResponse};
use ensemble::types::ToolCall;

/// One scripted reply from the provider.
#[derive(Clone)]
pub enum Scripted {
    /// Final assistant text.
    Text(String),
    /// Request invocation of a single tool.
    ToolCall {
        name: String,
        arguments: serde_json::Value,
    },
    /// Fail the completion call (surfaces as an API error).
    Fail(String),
}

/// Provider that replays a queued script and captures every request.
///
/// When the queue runs dry it serves `repeat` if set (used to simulate a
/// service that never stops requesting tools), otherwise a fixed final text.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    repeat: Option<Scripted>,
    requests: Mutex<Vec<CompletionRequest>>,
    call_counter: Mutex<u64>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            repeat: None,
            requests: Mutex::new(Vec::new()),
            call_counter: Mutex::new(0),
        }
    }

    /// Provider that answers every call the same way.
    pub fn repeating(response: Scripted) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            repeat: Some(response),
            requests: Mutex::new(Vec::new()),
            call_counter: Mutex::new(0),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error> {
        self.requests.lock().unwrap().push(request.clone());

        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.repeat.clone())
            .unwrap_or_else(|| Scripted::Text("ok".to_string()));

        match next {
            Scripted::Text(text) => Ok(CompletionResponse {
                text,
                tool_calls: Vec::new(),
            }),
            Scripted::ToolCall { name, arguments } => {
                let mut counter = self.call_counter.lock().unwrap();
                *counter += 1;
                Ok(CompletionResponse {
                    text: String::new(),
                    tool_calls: vec![ToolCall {
                        id: format!("call-{}", *counter),
                        name,
                        arguments,
                    }],
                })
            }
            Scripted::Fail(message) => Err(Error::api(503, message)),
        }
    }
}
