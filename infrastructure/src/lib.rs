//! Infrastructure layer for ai-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod ollama;
pub mod roster;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileActorConfig, FileConfig, FileDiscussionConfig,
    FileModelConfig, FileOllamaConfig, FileOutputConfig,
};
pub use logging::JsonlConversationLogger;
pub use ollama::{
    error::{OllamaError, Result},
    gateway::OllamaGateway,
};
pub use roster::{JsonRosterStore, RosterStoreError};
