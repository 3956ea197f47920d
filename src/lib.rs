//! Keyword library: named, documented callables for test-automation runners.
//!
//! Runners list keywords, ask for their documentation and arguments, and run
//! them by name. Where a JVM runner would scan annotated classes, this crate
//! uses an explicit registration table searched with glob patterns.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Keyword names, providers and discovery patterns
//! - **Ports**: The keyword source trait discovery runs against
//! - **Adapters**: The static in-memory keyword catalog
//!
//! # Modules
//!
//! - [`keyword`]: Keyword registration, discovery and invocation
//! - [`roboscratch`]: The example library exposing the `test` keyword

pub mod keyword;
pub mod roboscratch;
