//! Roboscratch test library entry point.

use serde_json::Value;

use super::Keywords;
use crate::keyword::{
    adapters::memory::StaticKeywordCatalog,
    domain::DiscoveryPattern,
    ports::KeywordSource,
    services::{KeywordError, KeywordLibrary, LibraryConfig, LibraryResult},
};

/// Pattern selecting the roboscratch keyword providers.
pub const KEYWORD_PATTERN: &str = "org/roboscratch/gradle/test/**/*.class";

/// Library introduction returned for `__intro__`.
pub const INTRODUCTION: &str =
    "A robot keyword library for testing continuous keyword lib development.";

/// Keyword library exposing the roboscratch keywords.
#[derive(Debug, Clone)]
pub struct TestLibrary {
    library: KeywordLibrary,
}

impl TestLibrary {
    /// Discovers the roboscratch keywords from the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`](crate::keyword::services::LibraryError) when
    /// the catalog cannot be built or discovery fails.
    pub fn new() -> LibraryResult<Self> {
        Self::with_source(&catalog()?)
    }

    /// Discovers the roboscratch pattern from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError`](crate::keyword::services::LibraryError) when
    /// discovery fails.
    pub fn with_source<S>(source: &S) -> LibraryResult<Self>
    where
        S: KeywordSource + ?Sized,
    {
        let library = KeywordLibrary::discover(source, &config())?;
        Ok(Self { library })
    }

    /// Returns the registered keyword names, sorted.
    #[must_use]
    pub fn keyword_names(&self) -> Vec<&str> {
        self.library.keyword_names()
    }

    /// Returns documentation for a keyword, `__intro__` or `__init__`.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::NotFound`] for unknown names.
    pub fn keyword_documentation(&self, name: &str) -> Result<&str, KeywordError> {
        self.library.keyword_documentation(name)
    }

    /// Returns the declared argument names of a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::NotFound`] for unknown names.
    pub fn keyword_arguments(&self, name: &str) -> Result<&[String], KeywordError> {
        self.library.keyword_arguments(name)
    }

    /// Runs a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError`] when the keyword is unknown, called with the
    /// wrong arguments, or fails.
    pub fn run_keyword(&self, name: &str, args: &[Value]) -> Result<Value, KeywordError> {
        self.library.run_keyword(name, args)
    }

    /// Returns the underlying keyword library.
    #[must_use]
    pub const fn library(&self) -> &KeywordLibrary {
        &self.library
    }

    /// Returns the pattern the library was discovered with.
    #[must_use]
    pub fn patterns(&self) -> &[DiscoveryPattern] {
        self.library.patterns()
    }
}

/// Builds the catalog holding the roboscratch providers.
///
/// # Errors
///
/// Returns [`LibraryError`](crate::keyword::services::LibraryError) when a
/// provider is invalid or registered twice.
pub fn catalog() -> LibraryResult<StaticKeywordCatalog> {
    Ok(StaticKeywordCatalog::new().with_provider(Keywords::provider()?)?)
}

/// Returns the configuration the test library is discovered with.
#[must_use]
pub fn config() -> LibraryConfig {
    LibraryConfig::new(KEYWORD_PATTERN).with_introduction(INTRODUCTION)
}
