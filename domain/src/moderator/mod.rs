//! Moderator domain
//!
//! Next-speaker decisions and the pure logic behind them: decoding the
//! moderator model's free-form answer, validating it against the roster and
//! recovering with a random fallback when it cannot be trusted.

pub mod decision;
pub mod parsing;
pub mod selection;
