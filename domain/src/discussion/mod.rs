//! Discussion domain
//!
//! Round accounting and the lifecycle of a single discussion run.

pub mod outcome;
pub mod policy;
pub mod state;
