//! Static keyword catalog adapter.

use std::collections::BTreeMap;

use crate::keyword::{
    domain::{DiscoveryPattern, KeywordProvider},
    ports::{KeywordSource, KeywordSourceError, KeywordSourceResult},
};

/// Registration table of keyword providers, keyed by provider path.
#[derive(Debug, Clone, Default)]
pub struct StaticKeywordCatalog {
    providers: BTreeMap<String, KeywordProvider>,
}

impl StaticKeywordCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a provider to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordSourceError::DuplicateProvider`] when a provider with
    /// the same path is already registered.
    pub fn with_provider(mut self, provider: KeywordProvider) -> KeywordSourceResult<Self> {
        let path = provider.path().to_owned();
        if self.providers.contains_key(&path) {
            return Err(KeywordSourceError::DuplicateProvider(path));
        }
        self.providers.insert(path, provider);
        Ok(self)
    }

    /// Creates a catalog from several providers.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordSourceError::DuplicateProvider`] on the first repeated
    /// provider path.
    pub fn with_providers(
        providers: impl IntoIterator<Item = KeywordProvider>,
    ) -> KeywordSourceResult<Self> {
        providers
            .into_iter()
            .try_fold(Self::new(), Self::with_provider)
    }

    /// Returns all registered providers ordered by path.
    #[must_use = "iterators are lazy"]
    pub fn providers(&self) -> impl Iterator<Item = &KeywordProvider> {
        self.providers.values()
    }
}

impl KeywordSource for StaticKeywordCatalog {
    fn scan(&self, pattern: &DiscoveryPattern) -> KeywordSourceResult<Vec<KeywordProvider>> {
        Ok(self
            .providers
            .values()
            .filter(|provider| pattern.matches(provider.path()))
            .cloned()
            .collect())
    }
}
