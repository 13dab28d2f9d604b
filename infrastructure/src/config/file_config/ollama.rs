//! Ollama backend configuration from TOML (`[ollama]` section)

use serde::{Deserialize, Serialize};

/// Default address of a local Ollama server
pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";

/// Raw Ollama configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server
    pub endpoint: String,
    /// Per-request timeout; unset means no timeout
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_OLLAMA_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}
