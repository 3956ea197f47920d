//! Error types for keyword library discovery and invocation.

use thiserror::Error;

use crate::keyword::{domain::KeywordDomainError, ports::KeywordSourceError};

/// Errors raised while building a keyword library.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LibraryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] KeywordDomainError),

    /// The keyword source failed.
    #[error(transparent)]
    Source(#[from] KeywordSourceError),

    /// The configuration document could not be parsed.
    #[error("invalid library configuration: {0}")]
    InvalidConfig(String),

    /// No keyword pattern was configured.
    #[error("keyword library has no keyword patterns")]
    NoKeywordPatterns,

    /// Discovery found nothing to register.
    #[error("no keywords found for pattern '{pattern}'")]
    EmptyDiscovery {
        /// The pattern, or comma-separated patterns, that found nothing.
        pattern: String,
    },

    /// Two providers contribute the same keyword name.
    #[error("keyword '{name}' is defined by both '{first}' and '{second}'")]
    DuplicateKeyword {
        /// Keyword name as spelled by the second provider.
        name: String,
        /// Provider path registered first.
        first: String,
        /// Provider path that clashed.
        second: String,
    },
}

/// Result type for keyword library construction.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors raised while looking up or running a keyword.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeywordError {
    /// No keyword is registered under the name.
    #[error("no keyword with name '{0}' found")]
    NotFound(String),

    /// The call supplied the wrong number of arguments.
    #[error("keyword '{keyword}' expected {expected} arguments, got {actual}")]
    ArgumentCountMismatch {
        /// Registered keyword name.
        keyword: String,
        /// Declared argument count.
        expected: usize,
        /// Supplied argument count.
        actual: usize,
    },

    /// The keyword handler reported a failure.
    #[error("keyword '{keyword}' failed: {message}")]
    Failed {
        /// Registered keyword name.
        keyword: String,
        /// Failure message from the handler.
        message: String,
    },
}
