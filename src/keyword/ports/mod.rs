//! Port contracts for keyword discovery.
//!
//! Ports define infrastructure-agnostic interfaces used by the keyword
//! library service.

pub mod source;

pub use source::{KeywordSource, KeywordSourceError, KeywordSourceResult};

#[cfg(test)]
pub use source::MockKeywordSource;
