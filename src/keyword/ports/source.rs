//! Keyword source port.
//!
//! A source answers discovery queries: given a pattern, it returns every
//! keyword provider whose path the pattern selects.

use thiserror::Error;

use crate::keyword::domain::{DiscoveryPattern, KeywordProvider};

/// Result type for keyword source operations.
pub type KeywordSourceResult<T> = Result<T, KeywordSourceError>;

/// Port for discovering keyword providers.
#[cfg_attr(test, mockall::automock)]
pub trait KeywordSource: Send + Sync {
    /// Returns the providers selected by `pattern`, ordered by path.
    ///
    /// An empty result is not an error at this level.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordSourceError`] when the source cannot be read.
    fn scan(&self, pattern: &DiscoveryPattern) -> KeywordSourceResult<Vec<KeywordProvider>>;
}

/// Errors for keyword source operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeywordSourceError {
    /// Two providers were registered under the same path.
    #[error("duplicate keyword provider: {0}")]
    DuplicateProvider(String),

    /// General storage or adapter failure.
    #[error("keyword source unavailable: {0}")]
    Unavailable(String),
}
