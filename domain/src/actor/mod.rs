//! Actor domain
//!
//! Identity of the discussion participants and the roster that holds them.

pub mod profile;
pub mod roster;
