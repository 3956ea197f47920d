//! Keyword library configuration.

use serde::{Deserialize, Serialize};

use super::LibraryError;

/// Settings a keyword library is discovered with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Glob patterns selecting keyword providers.
    pub keyword_patterns: Vec<String>,
    /// Text returned for the `__intro__` documentation request.
    pub introduction: Option<String>,
    /// Text returned for the `__init__` documentation request.
    pub init_documentation: Option<String>,
}

impl LibraryConfig {
    /// Creates a configuration with a single keyword pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::default().with_pattern(pattern)
    }

    /// Adds another keyword pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.keyword_patterns.push(pattern.into());
        self
    }

    /// Sets the library introduction.
    #[must_use]
    pub fn with_introduction(mut self, introduction: impl Into<String>) -> Self {
        self.introduction = Some(introduction.into());
        self
    }

    /// Sets the library init documentation.
    #[must_use]
    pub fn with_init_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.init_documentation = Some(documentation.into());
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::InvalidConfig`] when the document is not valid
    /// configuration JSON.
    pub fn from_json_str(raw: &str) -> Result<Self, LibraryError> {
        serde_json::from_str(raw).map_err(|err| LibraryError::InvalidConfig(err.to_string()))
    }
}
