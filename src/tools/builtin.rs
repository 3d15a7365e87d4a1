//! Built-in demo tools for the specialist agents.
//!
//! These simulate domain work with deterministic templated output so the
//! orchestration layer can be exercised end to end without extra services.
//! Each tool is constructed via [`AgentTool::new`] and returned as
//! `Box<dyn Tool>`.

use crate::tools::tool::{AgentTool, Tool};
use crate::tools::types::ToolParameters;

/// Create the `search_information` tool — canned research lookups.
///
/// Known topics (matched case-insensitively as substrings) return fixed
/// findings; anything else returns a generic fallback naming the topic.
pub fn search_information_tool() -> Box<dyn Tool> {
    Box::new(AgentTool::new(
        "search_information",
        "Search for information on a given topic",
        ToolParameters::object()
            .string("topic", "The topic to research", true)
            .build(),
        |args| async move {
            let topic = args.get_str("topic")?;
            let topic_lower = topic.to_lowercase();

            let research_data = [
                (
                    "python",
                    "Python is a high-level, interpreted programming language known for its \
                     simplicity and readability. It was created by Guido van Rossum and first \
                     released in 1991.",
                ),
                (
                    "ai",
                    "Artificial Intelligence (AI) refers to the simulation of human intelligence \
                     in machines. It includes machine learning, natural language processing, and \
                     computer vision.",
                ),
                (
                    "quantum computing",
                    "Quantum computing uses quantum-mechanical phenomena like superposition and \
                     entanglement to perform operations on data. It has the potential to solve \
                     certain problems much faster than classical computers.",
                ),
            ];

            for (key, value) in research_data {
                if topic_lower.contains(key) {
                    return Ok(serde_json::json!({ "findings": value }));
                }
            }

            Ok(serde_json::json!({
                "findings": format!(
                    "Research on '{topic}': This is a complex topic that requires further investigation."
                )
            }))
        },
    ))
}

/// Create the `analyze_data` tool — simulated analysis with a fixed trend.
pub fn analyze_data_tool() -> Box<dyn Tool> {
    Box::new(AgentTool::new(
        "analyze_data",
        "Analyze data and provide insights",
        ToolParameters::object()
            .string("data_description", "Description of the data to analyze", true)
            .build(),
        |args| async move {
            let data_description = args.get_str("data_description")?;
            Ok(serde_json::json!({
                "analysis": format!(
                    "Analysis of '{data_description}': The data shows a positive trend with a \
                     15% increase over the previous period. Key insights include improved \
                     performance metrics and user engagement."
                )
            }))
        },
    ))
}

/// Create the `create_content` tool — templated writing in a requested style.
///
/// The first line of the output is the style rendered uppercase in brackets.
pub fn create_content_tool() -> Box<dyn Tool> {
    Box::new(AgentTool::new(
        "create_content",
        "Create written content based on topic and style",
        ToolParameters::object()
            .string("topic", "The topic to write about", true)
            .string(
                "style",
                "Writing style (e.g., professional, casual, technical)",
                true,
            )
            .build(),
        |args| async move {
            let topic = args.get_str("topic")?;
            let style = args.get_str("style")?;
            Ok(serde_json::json!({
                "content": format!(
                    "[{} CONTENT]\n\n{topic}\n\nThis is a well-crafted piece of content tailored \
                     to the {style} style, covering the key aspects of {topic} with appropriate \
                     depth and clarity.",
                    style.to_uppercase()
                )
            }))
        },
    ))
}
