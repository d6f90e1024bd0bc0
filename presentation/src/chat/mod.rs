//! Interactive chat module
//!
//! Provides a line-editor based interactive research interface.

mod repl;

pub use repl::ResearchRepl;
