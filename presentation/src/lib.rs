//! Presentation layer for ai-panel
//!
//! This crate contains the CLI definition, console rendering, progress
//! display and the interactive console session.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::ConsoleConfig;
pub use output::console::ConsoleRenderer;
pub use progress::spinner::TurnSpinner;
pub use session::{ConsoleSession, SessionError};
