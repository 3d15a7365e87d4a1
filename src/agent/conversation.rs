//! Append-only conversation history.

use crate::types::{Role, Turn};

/// An agent's ordered, append-only turn log.
///
/// Invariants: the first turn, if present, is the single System turn inserted
/// at construction; turns are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Create an empty conversation (no system turn).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a conversation seeded with a system turn.
    pub fn with_system(prompt: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::system(prompt)],
        }
    }

    /// Append a user turn.
    pub fn add_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    /// Append an assistant turn.
    pub fn add_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
    }

    /// Append a raw turn.
    ///
    /// The system turn is fixed at construction; appending another System
    /// turn would corrupt the context sent to the completion service, so it
    /// panics.
    pub fn add_turn(&mut self, turn: Turn) {
        assert!(
            turn.role != Role::System || self.turns.is_empty(),
            "a conversation holds at most one system turn, inserted first"
        );
        self.turns.push(turn);
    }

    /// All turns, in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Snapshot of the turns for a completion call.
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    /// The last N turns.
    pub fn last_n(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Whether the conversation carries a leading system turn.
    pub fn has_system(&self) -> bool {
        self.turns.first().map(|t| t.role == Role::System).unwrap_or(false)
    }
}
