//! Ensemble — minimal multi-agent conversational orchestration.
//!
//! Named agents, each wrapping a language-model chat session with a distinct
//! system prompt and an optional registry of callable tools, coordinated by an
//! [`Orchestrator`](orchestrator::Orchestrator) directory. An agent's
//! [`process`](agent::Agent::process) call performs one full round trip,
//! including bounded tool invocation, against a
//! [`CompletionProvider`](provider::CompletionProvider).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use ensemble::prelude::*;
//! use ensemble::provider::google::GoogleProvider;
//! use ensemble::tools::builtin::search_information_tool;
//!
//! # async fn example() -> ensemble::error::Result<()> {
//! let provider = Arc::new(GoogleProvider::new("gemini-2.5-flash", "api-key"));
//! let mut agent = Agent::new(
//!     "ResearchAgent",
//!     "Research Specialist",
//!     "You are a research specialist.",
//!     provider,
//! )
//! .with_tool(search_information_tool());
//!
//! let reply = agent.process("Tell me about quantum computing").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
