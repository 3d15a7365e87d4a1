//! Core Agent struct with the process() round trip.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Error;
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::tools::registry::ToolRegistry;
use crate::tools::tool::Tool;
use crate::types::{CompletionSettings, ContentPart, Role, Turn};

use super::conversation::Conversation;

/// A named agent binding one conversation, a completion provider, and a tool
/// registry.
///
/// An agent is created once and lives for the process lifetime; only its own
/// `process` calls mutate the conversation. `process` takes `&mut self`, so
/// at most one round trip per agent is in flight at a time.
pub struct Agent {
    name: String,
    role: String,
    provider: Arc<dyn CompletionProvider>,
    registry: ToolRegistry,
    settings: CompletionSettings,
    conversation: Conversation,
}

impl Agent {
    /// Create a new agent with a system prompt seeding its conversation.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        system_prompt: impl Into<String>,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            provider,
            registry: ToolRegistry::new(),
            settings: CompletionSettings::default(),
            conversation: Conversation::with_system(system_prompt),
        }
    }

    /// Set completion settings.
    pub fn with_settings(mut self, settings: CompletionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Add a tool (builder form). Panics on duplicate names, which is a
    /// configuration error at construction time; use [`Agent::register_tool`]
    /// for a fallible variant.
    pub fn with_tool(mut self, tool: Box<dyn Tool>) -> Self {
        if let Err(e) = self.registry.register(tool) {
            panic!("{e}");
        }
        self
    }

    /// Register a tool, failing on a duplicate name.
    pub fn register_tool(&mut self, tool: Box<dyn Tool>) -> Result<(), Error> {
        self.registry.register(tool)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Get the conversation history.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Access the tool registry.
    pub fn tools(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Process one user message: append it, run the completion/tool loop, and
    /// return the final assistant text.
    ///
    /// Tool-level failures (unknown tool, bad arguments, execution error) are
    /// recovered inline as error-payload tool-result turns so the model can
    /// self-correct. Completion-service failures propagate; the triggering
    /// user turn stays appended, so the caller may retry.
    pub async fn process(&mut self, message: impl Into<String>) -> Result<String, Error> {
        self.conversation.add_user(message);

        let manifest = self.registry.manifest();
        let cap = self.settings.max_tool_iterations;

        for iteration in 0..cap {
            let request = CompletionRequest {
                turns: self.conversation.snapshot(),
                settings: self.settings.clone(),
                tools: manifest.clone(),
            };

            debug!(agent = %self.name, iteration, "calling completion service");
            let response = self.provider.complete(&request).await?;

            if !response.requests_tools() {
                self.conversation.add_assistant(&response.text);
                return Ok(response.text);
            }

            // Record the tool-call request as an assistant turn, then one
            // tool-result turn per call in request order.
            let mut assistant_content: Vec<ContentPart> = Vec::new();
            if !response.text.is_empty() {
                assistant_content.push(ContentPart::Text {
                    text: response.text.clone(),
                });
            }
            for tc in &response.tool_calls {
                assistant_content.push(ContentPart::ToolCall(tc.clone()));
            }
            self.conversation.add_turn(Turn {
                role: Role::Assistant,
                content: assistant_content,
                timestamp: Some(chrono::Utc::now()),
            });

            for tc in &response.tool_calls {
                let turn = match self.registry.invoke(&tc.name, tc.arguments.clone()).await {
                    Ok(val) => Turn::tool_result(tc.id.clone(), tc.name.clone(), val, false),
                    Err(e) => {
                        warn!(agent = %self.name, tool = %tc.name, error = %e, "tool invocation failed");
                        Turn::tool_result(
                            tc.id.clone(),
                            tc.name.clone(),
                            serde_json::json!({ "error": e.to_string() }),
                            true,
                        )
                    }
                };
                self.conversation.add_turn(turn);
            }
        }

        warn!(agent = %self.name, cap, "tool loop exhausted without final response");
        Err(Error::ToolLoopExceeded { iterations: cap })
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("provider", &self.provider.provider_name())
            .field("tools", &self.registry)
            .field("turns", &self.conversation.len())
            .finish()
    }
}
