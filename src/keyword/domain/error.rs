//! Error types for keyword domain validation.

use thiserror::Error;

/// Errors returned while constructing keyword domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeywordDomainError {
    /// The keyword name is empty after trimming.
    #[error("keyword name must not be empty")]
    EmptyKeywordName,

    /// The keyword name contains control characters.
    #[error("keyword name '{0}' contains control characters")]
    InvalidKeywordName(String),

    /// The keyword name exceeds the 128-character limit.
    #[error("keyword name exceeds 128 character limit: {0}")]
    KeywordNameTooLong(String),

    /// A declared argument name is empty after trimming.
    #[error("keyword argument name must not be empty")]
    EmptyArgumentName,

    /// The same argument name is declared twice on one keyword.
    #[error("duplicate keyword argument '{0}'")]
    DuplicateArgumentName(String),

    /// The provider path is empty after trimming.
    #[error("keyword provider path must not be empty")]
    EmptyProviderPath,

    /// The discovery pattern is empty after trimming.
    #[error("discovery pattern must not be empty")]
    EmptyPattern,

    /// The discovery pattern is not a valid glob.
    #[error("invalid discovery pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern text.
        pattern: String,
        /// Why the glob could not be compiled.
        reason: String,
    },
}
