//! Keyword definition value object.

use super::{KeywordArguments, KeywordName};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a keyword handler.
///
/// The runner treats this as a failed keyword step rather than a library
/// error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct KeywordFailure(pub String);

impl KeywordFailure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Callable behind a keyword.
pub type KeywordHandler = Arc<dyn Fn(&[Value]) -> Result<Value, KeywordFailure> + Send + Sync>;

/// Named, documented callable exposed to the automation runner.
#[derive(Clone)]
pub struct Keyword {
    name: KeywordName,
    documentation: String,
    arguments: KeywordArguments,
    handler: KeywordHandler,
}

impl Keyword {
    /// Creates a keyword taking no arguments.
    #[must_use]
    pub fn new<F>(name: KeywordName, documentation: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, KeywordFailure> + Send + Sync + 'static,
    {
        Self {
            name,
            documentation: documentation.into(),
            arguments: KeywordArguments::none(),
            handler: Arc::new(handler),
        }
    }

    /// Declares the keyword's arguments.
    #[must_use]
    pub fn with_arguments(mut self, arguments: KeywordArguments) -> Self {
        self.arguments = arguments;
        self
    }

    /// Returns the keyword name.
    #[must_use]
    pub const fn name(&self) -> &KeywordName {
        &self.name
    }

    /// Returns the documentation supplied at registration.
    #[must_use]
    pub fn documentation(&self) -> &str {
        &self.documentation
    }

    /// Returns the declared arguments.
    #[must_use]
    pub const fn arguments(&self) -> &KeywordArguments {
        &self.arguments
    }

    /// Calls the handler with already arity-checked arguments.
    ///
    /// # Errors
    ///
    /// Returns the handler's [`KeywordFailure`] unchanged.
    pub fn call(&self, args: &[Value]) -> Result<Value, KeywordFailure> {
        (self.handler)(args)
    }
}

impl fmt::Debug for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keyword")
            .field("name", &self.name)
            .field("documentation", &self.documentation)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
