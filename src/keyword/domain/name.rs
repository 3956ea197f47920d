//! Validated keyword name type.

use super::KeywordDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a keyword name in characters.
const MAX_NAME_LENGTH: usize = 128;

/// Validated keyword name as exposed to the automation runner.
///
/// The original spelling is kept for display. Lookups go through
/// [`KeywordName::normalized`], which follows the runner's matching rule:
/// case is ignored and so are spaces and underscores, making `Open Browser`,
/// `open_browser` and `OPENBROWSER` the same keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeywordName(String);

impl KeywordName {
    /// Creates a validated keyword name.
    ///
    /// The input is trimmed. Any printable text is accepted as long as
    /// something other than spaces and underscores remains for lookups.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordDomainError::EmptyKeywordName`] when the value is
    /// empty after trimming, [`KeywordDomainError::InvalidKeywordName`] when it
    /// contains control characters or only separators, or
    /// [`KeywordDomainError::KeywordNameTooLong`] when it exceeds 128
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, KeywordDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(KeywordDomainError::EmptyKeywordName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(KeywordDomainError::KeywordNameTooLong(raw));
        }

        if trimmed.chars().any(char::is_control) || normalize(trimmed).is_empty() {
            return Err(KeywordDomainError::InvalidKeywordName(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the keyword name as registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lookup key used by keyword registries.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }
}

/// Folds a raw keyword name into its lookup key.
///
/// Lowercases and strips spaces and underscores. Used for names coming from
/// the runner, which are not validated before lookup.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl TryFrom<String> for KeywordName {
    type Error = KeywordDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<KeywordName> for String {
    fn from(name: KeywordName) -> Self {
        name.0
    }
}

impl AsRef<str> for KeywordName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for KeywordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
