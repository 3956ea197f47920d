//! Unit tests for keyword domain types.

use crate::keyword::domain::{
    DiscoveryPattern, Keyword, KeywordArguments, KeywordDomainError, KeywordFailure, KeywordName,
    KeywordProvider, normalize,
};
use rstest::rstest;
use serde_json::{Value, json};

// ── KeywordName validation ─────────────────────────────────────────

#[rstest]
#[case("test")]
#[case("Open Browser")]
#[case("open_browser")]
#[case("Überprüfe Ergebnis")]
fn valid_keyword_names_are_accepted(#[case] input: &str) {
    let name = KeywordName::new(input).expect("valid name");
    assert_eq!(name.as_str(), input);
}

#[rstest]
fn keyword_name_is_trimmed_but_keeps_case() {
    let name = KeywordName::new("  Open Browser  ").expect("should accept after trim");
    assert_eq!(name.as_str(), "Open Browser");
    assert_eq!(name.normalized(), "openbrowser");
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_or_whitespace_keyword_name_is_rejected(#[case] input: &str) {
    let result = KeywordName::new(input);
    assert_eq!(result, Err(KeywordDomainError::EmptyKeywordName));
}

#[rstest]
#[case("open\tbrowser")]
#[case("line\nbreak")]
#[case("___")]
fn invalid_keyword_names_are_rejected(#[case] input: &str) {
    let result = KeywordName::new(input);
    assert!(matches!(
        result,
        Err(KeywordDomainError::InvalidKeywordName(_))
    ));
}

#[rstest]
#[case(128, true)]
#[case(129, false)]
fn keyword_name_length_boundary(#[case] length: usize, #[case] expected_ok: bool) {
    let name = "k".repeat(length);
    let result = KeywordName::new(&name);
    if expected_ok {
        assert!(result.is_ok(), "expected length {length} to be accepted");
    } else {
        assert!(
            matches!(result, Err(KeywordDomainError::KeywordNameTooLong(_))),
            "expected length {length} to be rejected"
        );
    }
}

#[rstest]
#[case("Open Browser", "openbrowser")]
#[case("open_browser", "openbrowser")]
#[case("OPEN  BROWSER", "openbrowser")]
#[case("__intro__", "intro")]
fn normalize_ignores_case_spaces_and_underscores(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize(raw), expected);
}

#[rstest]
fn keyword_name_deserialization_validates() {
    let parsed: KeywordName = serde_json::from_str("\" test \"").expect("valid json name");
    assert_eq!(parsed.as_str(), "test");

    let rejected = serde_json::from_str::<KeywordName>("\"\"");
    assert!(rejected.is_err());
}

// ── KeywordArguments ───────────────────────────────────────────────

#[rstest]
fn arguments_keep_declaration_order() {
    let arguments = KeywordArguments::new(["url", " browser "]).expect("valid arguments");
    assert_eq!(arguments.names(), ["url".to_owned(), "browser".to_owned()]);
    assert_eq!(arguments.len(), 2);
}

#[rstest]
fn blank_argument_name_is_rejected() {
    let result = KeywordArguments::new(["url", " "]);
    assert_eq!(result, Err(KeywordDomainError::EmptyArgumentName));
}

#[rstest]
fn duplicate_argument_name_is_rejected() {
    let result = KeywordArguments::new(["url", "url"]);
    assert_eq!(
        result,
        Err(KeywordDomainError::DuplicateArgumentName("url".to_owned()))
    );
}

// ── Keyword ────────────────────────────────────────────────────────

#[rstest]
fn keyword_call_passes_arguments_to_handler() {
    let keyword = Keyword::new(
        KeywordName::new("Echo").expect("valid name"),
        "Returns its argument.",
        |args: &[Value]| args.first().cloned().ok_or_else(|| KeywordFailure::new("missing")),
    )
    .with_arguments(KeywordArguments::new(["value"]).expect("valid arguments"));

    assert_eq!(keyword.documentation(), "Returns its argument.");
    assert_eq!(keyword.arguments().len(), 1);
    assert_eq!(keyword.call(&[json!("hi")]), Ok(json!("hi")));
    assert_eq!(keyword.call(&[]), Err(KeywordFailure::new("missing")));
}

#[rstest]
fn keyword_debug_omits_handler() {
    let keyword = Keyword::new(KeywordName::new("noop").expect("valid name"), "", |_| {
        Ok(Value::Null)
    });
    let rendered = format!("{keyword:?}");
    assert!(rendered.contains("noop"));
    assert!(rendered.ends_with(".. }"));
}

// ── KeywordProvider ────────────────────────────────────────────────

#[rstest]
fn provider_path_drops_leading_slash() {
    let provider = KeywordProvider::new(" /org/example/Keywords.class ").expect("valid path");
    assert_eq!(provider.path(), "org/example/Keywords.class");
    assert!(provider.keywords().is_empty());
}

#[rstest]
#[case("")]
#[case("  ")]
#[case("/")]
fn blank_provider_path_is_rejected(#[case] input: &str) {
    let result = KeywordProvider::new(input);
    assert!(matches!(result, Err(KeywordDomainError::EmptyProviderPath)));
}

// ── DiscoveryPattern ───────────────────────────────────────────────

#[rstest]
#[case("org/roboscratch/gradle/test/Keywords.class", true)]
#[case("org/roboscratch/gradle/test/nested/deep/More.class", true)]
#[case("org/roboscratch/gradle/other/Keywords.class", false)]
#[case("org/roboscratch/gradle/test/Keywords.java", false)]
fn recursive_pattern_matches_nested_providers(#[case] path: &str, #[case] expected: bool) {
    let pattern = DiscoveryPattern::new("org/roboscratch/gradle/test/**/*.class")
        .expect("valid pattern");
    assert_eq!(pattern.matches(path), expected, "path {path}");
}

#[rstest]
fn single_star_stays_within_one_segment() {
    let pattern = DiscoveryPattern::new("org/*/Keywords.class").expect("valid pattern");
    assert!(pattern.matches("org/example/Keywords.class"));
    assert!(!pattern.matches("org/example/nested/Keywords.class"));
}

#[rstest]
#[case("")]
#[case("   ")]
fn empty_pattern_is_rejected(#[case] input: &str) {
    let result = DiscoveryPattern::new(input);
    assert_eq!(result, Err(KeywordDomainError::EmptyPattern));
}

#[rstest]
#[case("org/**a/*.class")]
#[case("org/[a-/*.class")]
fn malformed_glob_is_rejected(#[case] input: &str) {
    let result = DiscoveryPattern::new(input);
    assert!(matches!(
        result,
        Err(KeywordDomainError::InvalidPattern { pattern, .. }) if pattern == input
    ));
}
