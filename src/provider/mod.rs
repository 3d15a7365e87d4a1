//! Completion service trait and implementations.

pub mod google;
pub mod http;

use async_trait::async_trait;

use crate::error::Error;
use crate::types::{CompletionSettings, ToolCall, Turn};

/// A request sent to a completion service.
///
/// The turn sequence is an immutable snapshot of the agent's conversation;
/// the service never mutates it — only the agent appends new turns after the
/// call returns.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub turns: Vec<Turn>,
    pub settings: CompletionSettings,
    pub tools: Option<Vec<ToolDefinition>>,
}

/// Tool descriptor sent to the completion service.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Response from a completion service: either a final assistant message or a
/// request to invoke one or more tools.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub text: String,
    pub tool_calls: Vec<ToolCall>,
}

impl CompletionResponse {
    /// Whether this response requests tool invocation rather than ending the
    /// round trip.
    pub fn requests_tools(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// Core trait implemented by all completion services.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Perform one completion call over the given turns and tool manifest.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, Error>;
}
