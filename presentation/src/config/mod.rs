//! Presentation-level configuration
//!
//! Configuration for console rendering and progress display.

use serde::{Deserialize, Serialize};

/// Console configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while waiting for the next turn
    pub show_progress: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl ConsoleConfig {
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}
