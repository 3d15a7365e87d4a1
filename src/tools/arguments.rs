//! Typed access to tool call arguments.

use crate::error::Error;

/// Wrapper around tool call arguments providing typed extraction.
#[derive(Debug, Clone)]
pub struct ToolArguments {
    value: serde_json::Value,
}

impl ToolArguments {
    pub fn new(value: serde_json::Value) -> Self {
        Self { value }
    }

    /// Get the raw JSON value.
    pub fn raw(&self) -> &serde_json::Value {
        &self.value
    }

    /// Get a string argument by key.
    pub fn get_str(&self, key: &str) -> Result<&str, Error> {
        self.value
            .get(key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::InvalidArgument(format!("Missing string argument: {key}")))
    }

    /// Get an optional string argument.
    pub fn get_str_opt(&self, key: &str) -> Option<&str> {
        self.value.get(key).and_then(|v| v.as_str())
    }

    /// Get an integer argument.
    pub fn get_i64(&self, key: &str) -> Result<i64, Error> {
        self.value
            .get(key)
            .and_then(|v| v.as_i64())
            .ok_or_else(|| Error::InvalidArgument(format!("Missing integer argument: {key}")))
    }

    /// Get a boolean argument.
    pub fn get_bool(&self, key: &str) -> Result<bool, Error> {
        self.value
            .get(key)
            .and_then(|v| v.as_bool())
            .ok_or_else(|| Error::InvalidArgument(format!("Missing boolean argument: {key}")))
    }

    /// Deserialize the entire arguments into a typed struct.
    ///
    /// Accepts either a JSON object or a string containing JSON, since some
    /// completion services deliver arguments as an encoded string.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, Error> {
        let value = match &self.value {
            serde_json::Value::String(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    serde_json::json!({})
                } else {
                    serde_json::from_str::<serde_json::Value>(trimmed).map_err(|e| {
                        Error::InvalidArgument(format!("Failed to deserialize arguments: {e}"))
                    })?
                }
            }
            other => other.clone(),
        };
        serde_json::from_value(value)
            .map_err(|e| Error::InvalidArgument(format!("Failed to deserialize arguments: {e}")))
    }
}
