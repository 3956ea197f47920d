//! In-memory keyword source adapters.
//!
//! The catalog is the explicit registration table standing in for
//! annotation scanning.

mod catalog;

pub use catalog::StaticKeywordCatalog;
