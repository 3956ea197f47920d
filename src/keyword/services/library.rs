//! Keyword library service.
//!
//! Provides [`KeywordLibrary`], the registry an automation runner talks to.
//! Discovery runs once at construction; afterwards the library only answers
//! name, documentation, argument and invocation requests.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap, hash_map::Entry};
use tracing::{debug, debug_span, info, warn};

use super::{KeywordError, LibraryConfig, LibraryError, LibraryResult};
use crate::keyword::{
    domain::{DiscoveryPattern, Keyword, KeywordProvider, normalize},
    ports::KeywordSource,
};

/// Documentation request for the library introduction.
pub const INTRO_SENTINEL: &str = "__intro__";

/// Documentation request for the library constructor.
pub const INIT_SENTINEL: &str = "__init__";

#[derive(Debug, Clone)]
struct RegisteredKeyword {
    keyword: Keyword,
    provider: String,
}

/// Read-only mapping from keyword names to keywords.
#[derive(Debug, Clone)]
pub struct KeywordLibrary {
    patterns: Vec<DiscoveryPattern>,
    introduction: String,
    init_documentation: String,
    keywords: HashMap<String, RegisteredKeyword>,
}

impl KeywordLibrary {
    /// Discovers keywords from `source` using every configured pattern.
    ///
    /// Providers selected by more than one pattern are registered once.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::NoKeywordPatterns`] for an empty pattern list,
    /// [`LibraryError::Domain`] for an invalid pattern,
    /// [`LibraryError::Source`] when scanning fails,
    /// [`LibraryError::EmptyDiscovery`] when a pattern selects no provider or
    /// the selected providers hold no keyword, and
    /// [`LibraryError::DuplicateKeyword`] when two keywords share a name.
    pub fn discover<S>(source: &S, config: &LibraryConfig) -> LibraryResult<Self>
    where
        S: KeywordSource + ?Sized,
    {
        if config.keyword_patterns.is_empty() {
            return Err(LibraryError::NoKeywordPatterns);
        }

        let patterns = config
            .keyword_patterns
            .iter()
            .map(|raw| DiscoveryPattern::new(raw.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        let providers = scan_all(source, &patterns)?;

        let mut keywords = HashMap::new();
        for provider in providers.values() {
            for keyword in provider.keywords() {
                register(&mut keywords, provider.path(), keyword)?;
            }
        }

        if keywords.is_empty() {
            let joined = patterns
                .iter()
                .map(DiscoveryPattern::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            warn!(patterns = %joined, "keyword providers matched but hold no keywords");
            return Err(LibraryError::EmptyDiscovery { pattern: joined });
        }

        info!(
            keywords = keywords.len(),
            providers = providers.len(),
            "keyword library discovered"
        );

        Ok(Self {
            patterns,
            introduction: config.introduction.clone().unwrap_or_default(),
            init_documentation: config.init_documentation.clone().unwrap_or_default(),
            keywords,
        })
    }

    /// Returns the registered keyword names, sorted.
    #[must_use]
    pub fn keyword_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .keywords
            .values()
            .map(|entry| entry.keyword.name().as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns documentation for a keyword or a sentinel name.
    ///
    /// [`INTRO_SENTINEL`] yields the library introduction and
    /// [`INIT_SENTINEL`] the constructor documentation, both empty when not
    /// configured. Sentinels are matched exactly and only here; running a
    /// keyword or asking for its arguments always goes through name matching.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::NotFound`] for unknown names.
    pub fn keyword_documentation(&self, name: &str) -> Result<&str, KeywordError> {
        match name {
            INTRO_SENTINEL => Ok(self.introduction.as_str()),
            INIT_SENTINEL => Ok(self.init_documentation.as_str()),
            _ => Ok(self.lookup(name)?.keyword.documentation()),
        }
    }

    /// Returns the declared argument names of a keyword.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::NotFound`] for unknown names.
    pub fn keyword_arguments(&self, name: &str) -> Result<&[String], KeywordError> {
        Ok(self.lookup(name)?.keyword.arguments().names())
    }

    /// Runs a keyword with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordError::NotFound`] for unknown names,
    /// [`KeywordError::ArgumentCountMismatch`] when `args` does not match the
    /// declared arguments, or [`KeywordError::Failed`] when the handler fails.
    pub fn run_keyword(&self, name: &str, args: &[Value]) -> Result<Value, KeywordError> {
        let keyword = &self.lookup(name)?.keyword;
        let _span = debug_span!("run_keyword", keyword = %keyword.name()).entered();

        let expected = keyword.arguments().len();
        if args.len() != expected {
            return Err(KeywordError::ArgumentCountMismatch {
                keyword: keyword.name().to_string(),
                expected,
                actual: args.len(),
            });
        }

        let result = keyword.call(args).map_err(|failure| {
            debug!(%failure, "keyword failed");
            KeywordError::Failed {
                keyword: keyword.name().to_string(),
                message: failure.0,
            }
        })?;
        debug!("keyword passed");
        Ok(result)
    }

    /// Returns the keyword registered under `name`, if any.
    #[must_use]
    pub fn keyword(&self, name: &str) -> Option<&Keyword> {
        self.keywords
            .get(&normalize(name))
            .map(|entry| &entry.keyword)
    }

    /// Returns `true` when `name` resolves to a keyword.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.keywords.contains_key(&normalize(name))
    }

    /// Returns the number of registered keywords.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` when no keyword is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns the patterns the library was discovered with.
    #[must_use]
    pub fn patterns(&self) -> &[DiscoveryPattern] {
        &self.patterns
    }

    fn lookup(&self, name: &str) -> Result<&RegisteredKeyword, KeywordError> {
        self.keywords.get(&normalize(name)).ok_or_else(|| {
            warn!(keyword = name, "unknown keyword requested");
            KeywordError::NotFound(name.to_owned())
        })
    }
}

fn scan_all<S>(
    source: &S,
    patterns: &[DiscoveryPattern],
) -> LibraryResult<BTreeMap<String, KeywordProvider>>
where
    S: KeywordSource + ?Sized,
{
    let mut providers = BTreeMap::new();
    for pattern in patterns {
        let matched = source.scan(pattern)?;
        debug!(%pattern, providers = matched.len(), "scanned keyword pattern");
        if matched.is_empty() {
            warn!(%pattern, "keyword pattern matched no providers");
            return Err(LibraryError::EmptyDiscovery {
                pattern: pattern.as_str().to_owned(),
            });
        }
        for provider in matched {
            providers
                .entry(provider.path().to_owned())
                .or_insert(provider);
        }
    }
    Ok(providers)
}

fn register(
    keywords: &mut HashMap<String, RegisteredKeyword>,
    provider: &str,
    keyword: &Keyword,
) -> LibraryResult<()> {
    match keywords.entry(keyword.name().normalized()) {
        Entry::Occupied(existing) => Err(LibraryError::DuplicateKeyword {
            name: keyword.name().to_string(),
            first: existing.get().provider.clone(),
            second: provider.to_owned(),
        }),
        Entry::Vacant(slot) => {
            debug!(keyword = %keyword.name(), provider, "registered keyword");
            slot.insert(RegisteredKeyword {
                keyword: keyword.clone(),
                provider: provider.to_owned(),
            });
            Ok(())
        }
    }
}
