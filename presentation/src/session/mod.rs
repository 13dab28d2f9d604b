//! Console session
//!
//! Runs discussions in the terminal: streams events as they arrive, listens
//! for `q` to stop, and asks for new topics in interactive mode.

mod console;

pub use console::{ConsoleSession, SessionError};
