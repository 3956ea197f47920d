//! Keyword provider grouping.

use super::{Keyword, KeywordDomainError};

/// A group of keywords registered under one provider path.
///
/// Provider paths use `/` separators, e.g.
/// `org/roboscratch/gradle/test/Keywords.class`, and are what discovery
/// patterns are matched against.
#[derive(Debug, Clone)]
pub struct KeywordProvider {
    path: String,
    keywords: Vec<Keyword>,
}

impl KeywordProvider {
    /// Creates an empty provider at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordDomainError::EmptyProviderPath`] when the path is
    /// blank after trimming.
    pub fn new(path: impl Into<String>) -> Result<Self, KeywordDomainError> {
        let normalized = path.into().trim().trim_start_matches('/').to_owned();
        if normalized.is_empty() {
            return Err(KeywordDomainError::EmptyProviderPath);
        }
        Ok(Self {
            path: normalized,
            keywords: Vec::new(),
        })
    }

    /// Adds a keyword to the provider.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    /// Returns the provider path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the keywords in registration order.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }
}
