//! Declared keyword argument names.

use super::KeywordDomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered argument names a keyword declares to the runner.
///
/// The count doubles as the arity checked before a keyword handler runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordArguments(Vec<String>);

impl KeywordArguments {
    /// Creates an empty argument list.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Creates a validated argument list.
    ///
    /// Names are trimmed and must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordDomainError::EmptyArgumentName`] for blank names or
    /// [`KeywordDomainError::DuplicateArgumentName`] when a name repeats.
    pub fn new(
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, KeywordDomainError> {
        let mut seen = HashSet::new();
        let mut declared = Vec::new();
        for raw in names {
            let name = raw.into().trim().to_owned();
            if name.is_empty() {
                return Err(KeywordDomainError::EmptyArgumentName);
            }
            if !seen.insert(name.clone()) {
                return Err(KeywordDomainError::DuplicateArgumentName(name));
            }
            declared.push(name);
        }
        Ok(Self(declared))
    }

    /// Returns the declared names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of declared arguments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the keyword takes no arguments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
