//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated discussion topic
//! - [`model::ModelConfig`]: model name and sampling parameters
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod topic;
