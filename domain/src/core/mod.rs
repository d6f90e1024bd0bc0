//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`]: a validated research question
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: UTF-8 safe truncation helpers

pub mod error;
pub mod query;
pub mod string;
