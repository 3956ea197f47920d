//! Application services for keyword discovery and invocation.

mod config;
mod error;
mod library;

pub use config::LibraryConfig;
pub use error::{KeywordError, LibraryError, LibraryResult};
pub use library::{INIT_SENTINEL, INTRO_SENTINEL, KeywordLibrary};
