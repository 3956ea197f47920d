//! Discovery pattern matched against provider paths.

use super::KeywordDomainError;
use glob::{MatchOptions, Pattern};
use std::fmt;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Glob selecting which keyword providers a library exposes.
///
/// `**` spans any number of path segments and `*` stays within one, so
/// `org/roboscratch/gradle/test/**/*.class` matches
/// `org/roboscratch/gradle/test/Keywords.class` and anything nested below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryPattern {
    raw: String,
    compiled: Pattern,
}

impl DiscoveryPattern {
    /// Compiles a discovery pattern.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordDomainError::EmptyPattern`] for blank input or
    /// [`KeywordDomainError::InvalidPattern`] when the glob does not compile.
    pub fn new(value: impl Into<String>) -> Result<Self, KeywordDomainError> {
        let raw = value.into().trim().trim_start_matches('/').to_owned();
        if raw.is_empty() {
            return Err(KeywordDomainError::EmptyPattern);
        }
        let compiled = Pattern::new(&raw).map_err(|err| KeywordDomainError::InvalidPattern {
            pattern: raw.clone(),
            reason: err.msg.to_owned(),
        })?;
        Ok(Self { raw, compiled })
    }

    /// Returns `true` when `path` is selected by this pattern.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.compiled.matches_with(path, MATCH_OPTIONS)
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for DiscoveryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
