//! Configuration file loading for ai-panel
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AI_PANEL_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel.toml` or `./.panel.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ai-panel/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_OLLAMA_ENDPOINT, FileActorConfig, FileConfig,
    FileDiscussionConfig, FileModelConfig, FileOllamaConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ConfigSource};
