//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and application
//! types once validated.

mod actors;
mod discussion;
mod model;
mod ollama;
mod output;

pub use actors::FileActorConfig;
pub use discussion::FileDiscussionConfig;
pub use model::FileModelConfig;
pub use ollama::{DEFAULT_OLLAMA_ENDPOINT, FileOllamaConfig};
pub use output::FileOutputConfig;

use panel_domain::{DomainError, Roster};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discussions shorter than this are allowed but rarely useful
const SHORT_DISCUSSION_ROUNDS: usize = 3;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("discussion.max_rounds must be at least 1")]
    InvalidMaxRounds,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("model.temperature must be between 0 and 2, got {0}")]
    InvalidTemperature(f32),

    #[error("model.top_p must be between 0 and 1, got {0}")]
    InvalidTopP(f32),

    #[error("ollama.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("ollama.endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("[[actors]] must contain at least one enabled actor")]
    NoEnabledActors,

    #[error("invalid [[actors]] entry: {0}")]
    InvalidRoster(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Inference model and sampling parameters
    pub model: FileModelConfig,
    /// Round loop settings
    pub discussion: FileDiscussionConfig,
    /// Inference backend
    pub ollama: FileOllamaConfig,
    /// Console and transcript settings
    pub output: FileOutputConfig,
    /// Panel roster; the built-in panel is used when empty
    pub actors: Vec<FileActorConfig>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.discussion.max_rounds == 0 {
            return Err(ConfigValidationError::InvalidMaxRounds);
        }

        if self.model.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(
                self.model.temperature,
            ));
        }

        if !(0.0..=1.0).contains(&self.model.top_p) {
            return Err(ConfigValidationError::InvalidTopP(self.model.top_p));
        }

        if let Some(0) = self.ollama.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.ollama.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        self.roster()?;

        Ok(())
    }

    /// Non-fatal observations about the configuration
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.discussion.max_rounds < SHORT_DISCUSSION_ROUNDS {
            warnings.push(format!(
                "discussion.max_rounds = {} leaves little room for discussion",
                self.discussion.max_rounds
            ));
        }
        if self.discussion.last_round_margin >= self.discussion.max_rounds {
            warnings.push(
                "discussion.last_round_margin is not below max_rounds; no wind-down round will be announced"
                    .to_string(),
            );
        }
        warnings
    }

    /// The configured roster, or `None` when no `[[actors]]` are listed
    pub fn roster(&self) -> Result<Option<Roster>, ConfigValidationError> {
        if self.actors.is_empty() {
            return Ok(None);
        }
        let roster = Roster::new(self.actors.iter().map(FileActorConfig::to_profile).collect())?;
        if roster.enabled_count() == 0 {
            return Err(ConfigValidationError::NoEnabledActors);
        }
        Ok(Some(roster))
    }
}
