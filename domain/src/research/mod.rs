//! Research domain
//!
//! Value objects and pure policies of the research pipeline:
//!
//! - [`Document`] / [`SubQuestion`] / [`ResearchResult`]: data passed between stages
//! - [`Phase`]: linear stage progression
//! - [`dedup_by_url`]: merge-time deduplication
//! - [`ContextBuilder`]: ranking and truncation of synthesis context

pub mod context;
pub mod dedup;
pub mod document;
pub mod phase;
pub mod result;
pub mod sub_question;

pub use context::{ContextBuilder, ResearchContext};
pub use dedup::dedup_by_url;
pub use document::Document;
pub use phase::Phase;
pub use result::{NO_SOURCES_ANSWER, ResearchResult};
pub use sub_question::SubQuestion;
