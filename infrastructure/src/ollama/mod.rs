//! Ollama adapter
//!
//! Implements LlmGateway over the Ollama HTTP API.

pub mod error;
pub mod gateway;
