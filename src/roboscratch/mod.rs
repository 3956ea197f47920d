//! Example keyword library for the roboscratch Gradle plugin test project.
//!
//! [`TestLibrary`] composes a [`KeywordLibrary`](crate::keyword::services::KeywordLibrary)
//! with a catalog holding [`Keywords`] and answers the `__intro__`
//! documentation request with [`INTRODUCTION`].

mod keywords;
mod library;

pub use keywords::{Keywords, PROVIDER_PATH, TEST_KEYWORD_DOC, TEST_KEYWORD_RESULT};
pub use library::{INTRODUCTION, KEYWORD_PATTERN, TestLibrary, catalog, config};

#[cfg(test)]
mod tests;
