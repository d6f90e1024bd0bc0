//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod decompose_query;
pub mod retrieve_documents;
pub mod run_research;
pub mod synthesize_answer;

#[cfg(test)]
pub(crate) mod test_support;
