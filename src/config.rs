//! Configuration (layered: code > env).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// API key and base URL configuration for completion providers.
///
/// Explicit setters win over values read from the environment. Credentials
/// live here, outside the agent/orchestration core's data model.
#[derive(Debug, Clone, Default)]
pub struct EnsembleConfig {
    api_keys: Arc<RwLock<HashMap<String, String>>>,
    base_urls: Arc<RwLock<HashMap<String, String>>>,
}

impl EnsembleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (`GOOGLE_API_KEY` / `GEMINI_API_KEY`),
    /// reading a `.env` file first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let config = Self::new();

        let env_mappings = [
            ("GOOGLE_API_KEY", "google"),
            ("GEMINI_API_KEY", "google"),
        ];
        for (env_var, provider) in &env_mappings {
            if let Ok(key) = std::env::var(env_var) {
                config.set_api_key(provider, key);
            }
        }

        if let Ok(url) = std::env::var("GOOGLE_BASE_URL") {
            config.set_base_url("google", url);
        }

        config
    }

    pub fn set_api_key(&self, provider: &str, key: String) {
        self.api_keys
            .write()
            .unwrap()
            .insert(provider.to_string(), key);
    }

    pub fn get_api_key(&self, provider: &str) -> Option<String> {
        self.api_keys.read().unwrap().get(provider).cloned()
    }

    pub fn set_base_url(&self, provider: &str, url: String) {
        self.base_urls
            .write()
            .unwrap()
            .insert(provider.to_string(), url);
    }

    pub fn get_base_url(&self, provider: &str) -> Option<String> {
        self.base_urls.read().unwrap().get(provider).cloned()
    }

    /// Check if a provider has credentials configured.
    pub fn has_credentials(&self, provider: &str) -> bool {
        self.get_api_key(provider).is_some()
    }
}
