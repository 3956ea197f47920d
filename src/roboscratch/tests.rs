//! Unit tests for the roboscratch test library.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::{
    INTRODUCTION, KEYWORD_PATTERN, Keywords, PROVIDER_PATH, TEST_KEYWORD_DOC, TestLibrary,
    catalog,
};
use crate::keyword::{
    adapters::memory::StaticKeywordCatalog,
    domain::KeywordProvider,
    services::{KeywordError, LibraryError},
};

#[fixture]
fn test_library() -> TestLibrary {
    TestLibrary::new().expect("built-in catalog should discover")
}

#[rstest]
fn test_keyword_returns_fixed_string() {
    assert_eq!(Keywords::test(), "test keyword called ...");
}

#[rstest]
fn library_exposes_only_the_test_keyword(test_library: TestLibrary) {
    assert_eq!(test_library.keyword_names(), ["test"]);
    assert_eq!(test_library.library().len(), 1);
    assert_eq!(
        test_library.patterns().first().map(|p| p.as_str()),
        Some(KEYWORD_PATTERN)
    );
}

#[rstest]
fn intro_documentation_is_the_library_introduction(test_library: TestLibrary) {
    assert_eq!(
        test_library.keyword_documentation("__intro__"),
        Ok(INTRODUCTION)
    );
}

#[rstest]
fn test_keyword_documentation_is_registered_text(test_library: TestLibrary) {
    assert_eq!(
        test_library.keyword_documentation("test"),
        Ok(TEST_KEYWORD_DOC)
    );
}

#[rstest]
fn running_test_keyword_returns_fixed_string(test_library: TestLibrary) {
    assert_eq!(
        test_library.run_keyword("test", &[]),
        Ok(json!("test keyword called ..."))
    );
    assert_eq!(test_library.keyword_arguments("test"), Ok([].as_slice()));
}

#[rstest]
fn running_test_keyword_with_arguments_is_rejected(test_library: TestLibrary) {
    assert!(matches!(
        test_library.run_keyword("test", &[Value::Null]),
        Err(KeywordError::ArgumentCountMismatch {
            expected: 0,
            actual: 1,
            ..
        })
    ));
}

#[rstest]
fn unknown_keyword_is_not_found(test_library: TestLibrary) {
    assert_eq!(
        test_library.run_keyword("missing", &[]),
        Err(KeywordError::NotFound("missing".to_owned()))
    );
}

#[rstest]
fn catalog_registers_keywords_provider() {
    let built = catalog().expect("catalog should build");
    let paths: Vec<&str> = built.providers().map(KeywordProvider::path).collect();
    assert_eq!(paths, [PROVIDER_PATH]);
}

#[rstest]
fn library_fails_when_source_lacks_roboscratch_providers() {
    let empty = StaticKeywordCatalog::new();
    let result = TestLibrary::with_source(&empty).map(|library| library.library().len());
    assert_eq!(
        result,
        Err(LibraryError::EmptyDiscovery {
            pattern: KEYWORD_PATTERN.to_owned(),
        })
    );
}
