//! Keywords for exercising continuous keyword library development.

use serde_json::Value;

use crate::keyword::domain::{Keyword, KeywordDomainError, KeywordName, KeywordProvider};

/// Provider path the keywords below are registered under.
pub const PROVIDER_PATH: &str = "org/roboscratch/gradle/test/Keywords.class";

/// Value returned by the `test` keyword.
pub const TEST_KEYWORD_RESULT: &str = "test keyword called ...";

/// Documentation of the `test` keyword.
pub const TEST_KEYWORD_DOC: &str = "For testing ...";

/// The roboscratch keyword set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keywords;

impl Keywords {
    /// Returns the fixed test string.
    #[must_use]
    pub const fn test() -> &'static str {
        TEST_KEYWORD_RESULT
    }

    /// Builds the provider holding every roboscratch keyword.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordDomainError`] if a keyword definition is invalid.
    pub fn provider() -> Result<KeywordProvider, KeywordDomainError> {
        let test = Keyword::new(KeywordName::new("test")?, TEST_KEYWORD_DOC, |_| {
            Ok(Value::String(Self::test().to_owned()))
        });
        Ok(KeywordProvider::new(PROVIDER_PATH)?.with_keyword(test))
    }
}
