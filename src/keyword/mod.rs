//! Keyword registration, discovery and invocation.
//!
//! Keywords are named, documented callables an external automation runner
//! can list, describe and run. Providers register them in a catalog and a
//! [`services::KeywordLibrary`] discovers them by glob pattern. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
