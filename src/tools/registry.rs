//! Per-agent tool registry: ordered registration, lookup, and invocation.

use tracing::{debug, warn};

use super::arguments::ToolArguments;
use super::tool::Tool;
use super::validation::validate_arguments;
use crate::error::Error;
use crate::provider::ToolDefinition;

/// Ordered collection of tools registered on one agent.
///
/// Tool names are unique within a registry; a collision is a configuration
/// error surfaced at registration time, not at invocation time.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Fails with [`Error::DuplicateTool`] if a tool with
    /// the same name is already present.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<(), Error> {
        if self.tools.iter().any(|t| t.name() == tool.name()) {
            return Err(Error::DuplicateTool(tool.name().to_string()));
        }
        debug!(tool = tool.name(), "tool registered");
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// The manifest sent to the completion service: all descriptors in
    /// registration order. `None` when the registry is empty, which disables
    /// tool choice entirely.
    pub fn manifest(&self) -> Option<Vec<ToolDefinition>> {
        if self.tools.is_empty() {
            return None;
        }
        Some(
            self.tools
                .iter()
                .map(|t| ToolDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters().schema.clone(),
                })
                .collect(),
        )
    }

    /// Invoke a tool by name with the given arguments.
    ///
    /// Arguments are validated against the tool's parameter schema before
    /// execution; a missing required field or type mismatch fails with
    /// [`Error::InvalidArgument`] without running the tool.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, Error> {
        let tool = self.get(name).ok_or_else(|| Error::ToolExecution {
            tool_name: name.to_string(),
            message: format!("Tool '{name}' not found"),
        })?;

        if let Err(msg) = validate_arguments(&arguments, &tool.parameters().schema) {
            warn!(tool = name, error = %msg, "tool arguments rejected");
            return Err(Error::InvalidArgument(format!("{name}: {msg}")));
        }

        debug!(tool = name, "invoking tool");
        tool.execute(&ToolArguments::new(arguments)).await
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field(
                "tools",
                &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::tool::AgentTool;
    use crate::tools::types::ToolParameters;

    fn echo_tool(name: &str) -> Box<dyn Tool> {
        Box::new(AgentTool::new(
            name,
            "Echo the input",
            ToolParameters::object().string("text", "Text to echo", true).build(),
            |args| async move {
                let text = args.get_str("text")?;
                Ok(serde_json::json!({ "echo": text }))
            },
        ))
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo")).unwrap();
        let err = registry.register(echo_tool("echo")).unwrap_err();
        assert!(matches!(err, Error::DuplicateTool(name) if name == "echo"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn manifest_preserves_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("b")).unwrap();
        registry.register(echo_tool("a")).unwrap();
        let manifest = registry.manifest().unwrap();
        assert_eq!(manifest[0].name, "b");
        assert_eq!(manifest[1].name, "a");
    }

    #[test]
    fn empty_registry_has_no_manifest() {
        assert!(ToolRegistry::new().manifest().is_none());
    }

    #[tokio::test]
    async fn invoke_validates_before_executing() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo")).unwrap();

        let err = registry.invoke("echo", serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));

        let out = registry
            .invoke("echo", serde_json::json!({ "text": "hi" }))
            .await
            .unwrap();
        assert_eq!(out["echo"], "hi");
    }

    #[tokio::test]
    async fn invoke_unknown_tool_is_execution_error() {
        let registry = ToolRegistry::new();
        let err = registry.invoke("nope", serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, Error::ToolExecution { .. }));
    }
}
