//! Error types for Ensemble.

use thiserror::Error;

/// Primary error type for all Ensemble operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Duplicate tool: '{0}' is already registered on this agent")]
    DuplicateTool(String),

    #[error("Duplicate agent: '{0}' is already registered")]
    DuplicateAgent(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Tool execution error: {tool_name} — {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Tool loop exceeded {iterations} iterations without a final response")]
    ToolLoopExceeded { iterations: usize },
}

impl Error {
    /// Create an API error from a status code and body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is potentially retryable.
    ///
    /// Completion-service failures (network, rate limit, 5xx) leave the
    /// conversation intact, so the caller may retry `process`.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;
