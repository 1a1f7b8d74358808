//! Prompt domain
//!
//! Templates for the generation request sent to the model.

mod template;

pub use template::PromptTemplate;
