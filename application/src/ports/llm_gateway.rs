//! Inference backend port
//!
//! Actors and the moderator reach the language model only through
//! [`LlmGateway`]. The Ollama adapter lives in the infrastructure crate.

use async_trait::async_trait;
use panel_domain::ModelConfig;
use thiserror::Error;

/// Why an inference call produced no text
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Cannot reach inference backend: {0}")]
    ConnectionError(String),

    #[error("Model '{0}' is not installed on the backend")]
    ModelNotAvailable(String),

    #[error("Inference request failed: {0}")]
    RequestFailed(String),

    #[error("Unreadable backend response: {0}")]
    InvalidResponse(String),

    #[error("Inference request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

/// Stateless text completion.
///
/// Each call is independent; the prompt already holds the context window.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Complete `prompt` with `model` and return the generated text
    async fn complete(&self, model: &ModelConfig, prompt: &str) -> Result<String, GatewayError>;
}
