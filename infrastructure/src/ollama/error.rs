//! Error types for the Ollama adapter

use panel_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Model '{0}' is not available on the Ollama server")]
    ModelNotFound(String),

    #[error("Invalid Ollama response: {0}")]
    InvalidResponse(String),
}

impl From<OllamaError> for GatewayError {
    fn from(err: OllamaError) -> Self {
        match err {
            OllamaError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            OllamaError::Http(e) if e.is_connect() => GatewayError::ConnectionError(e.to_string()),
            OllamaError::Http(e) => GatewayError::RequestFailed(e.to_string()),
            OllamaError::Status { status, body } => {
                GatewayError::RequestFailed(format!("Ollama returned {}: {}", status, body))
            }
            OllamaError::ModelNotFound(model) => GatewayError::ModelNotAvailable(model),
            OllamaError::InvalidResponse(msg) => GatewayError::InvalidResponse(msg),
        }
    }
}
