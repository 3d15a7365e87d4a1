//! Convenience re-exports for common use.

pub use crate::agent::{Agent, Conversation};
pub use crate::config::EnsembleConfig;
pub use crate::error::{Error, Result};
pub use crate::orchestrator::{AgentSummary, Orchestrator};
pub use crate::provider::{
    CompletionProvider, CompletionRequest, CompletionResponse, ToolDefinition,
};
pub use crate::tools::{AgentTool, Tool, ToolArguments, ToolParameters, ToolRegistry};
pub use crate::types::{CompletionSettings, ContentPart, Role, ToolCall, ToolResult, Turn};
