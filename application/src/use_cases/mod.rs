//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_quiz;
pub mod quiz_controller;

#[cfg(test)]
pub(crate) mod test_support;
