//! Agent system: multi-turn conversations with tool execution.

pub mod agent;
pub mod conversation;

pub use agent::Agent;
pub use conversation::Conversation;
