//! Domain model for keyword registration and lookup.
//!
//! Keywords are grouped into providers, providers are selected by discovery
//! patterns. All infrastructure concerns are kept outside the domain
//! boundary.

mod arguments;
mod error;
mod keyword;
mod name;
mod pattern;
mod provider;

pub use arguments::KeywordArguments;
pub use error::KeywordDomainError;
pub use keyword::{Keyword, KeywordFailure, KeywordHandler};
pub use name::{KeywordName, normalize};
pub use pattern::DiscoveryPattern;
pub use provider::KeywordProvider;
