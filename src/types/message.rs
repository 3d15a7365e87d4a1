//! Turn types for conversation state and model communication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single turn in a conversation.
///
/// Turns are immutable once appended to a [`Conversation`](crate::agent::Conversation);
/// ordering defines the conversational context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: Vec<ContentPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    /// Create a system turn.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: vec![ContentPart::Text { text: text.into() }],
            timestamp: Some(Utc::now()),
        }
    }

    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentPart::Text { text: text.into() }],
            timestamp: Some(Utc::now()),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentPart::Text { text: text.into() }],
            timestamp: Some(Utc::now()),
        }
    }

    /// Create a tool result turn.
    pub fn tool_result(
        tool_call_id: impl Into<String>,
        tool_name: impl Into<String>,
        result: serde_json::Value,
        is_error: bool,
    ) -> Self {
        Self {
            role: Role::Tool,
            content: vec![ContentPart::ToolResult(ToolResult {
                tool_call_id: tool_call_id.into(),
                tool_name: tool_name.into(),
                result,
                is_error,
            })],
            timestamp: Some(Utc::now()),
        }
    }

    /// Extract the text content, concatenating all text parts.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract tool calls from this turn.
    pub fn tool_calls(&self) -> Vec<&ToolCall> {
        self.content
            .iter()
            .filter_map(|part| match part {
                ContentPart::ToolCall(tc) => Some(tc),
                _ => None,
            })
            .collect()
    }
}

/// Conversation role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single part of turn content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ToolCall(ToolCall),
    ToolResult(ToolResult),
}

/// A tool invocation requested by the completion service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// A tool execution result fed back to the completion service.
///
/// `tool_name` identifies which function produced the result; services whose
/// wire has no call ids (Gemini) correlate results by this name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub tool_name: String,
    pub result: serde_json::Value,
    #[serde(default)]
    pub is_error: bool,
}

/// Settings controlling a completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    /// Upper bound on tool-invocation rounds within one `process` call.
    pub max_tool_iterations: usize,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: None,
            max_tool_iterations: 8,
        }
    }
}
