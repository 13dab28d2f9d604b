//! Progress display

pub mod spinner;
