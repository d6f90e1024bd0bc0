//! Prompt domain
//!
//! Templates for the decomposition and synthesis requests.

mod template;

pub use template::PromptTemplate;
