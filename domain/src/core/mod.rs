//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: generative models that accept a response schema
//! - [`subject::Subject`]: a validated quiz topic
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod subject;
