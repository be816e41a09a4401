//! Integration tests for the --check validation pass

use flowdot::lint::{self, LintCategory};
use flowdot::convert;

#[test]
fn test_messy_document_all_categories() {
    let source = include_str!("fixtures/messy.dsl");
    let warnings = lint::check(source);

    let categories: Vec<String> = warnings.iter().map(|w| w.category.to_string()).collect();
    assert!(
        categories.contains(&"skipped".to_string()),
        "Expected skipped warning, got: {:?}",
        categories
    );
    assert!(
        categories.contains(&"dangling".to_string()),
        "Expected dangling warning, got: {:?}",
        categories
    );

    // "c" is referenced but its declaration line is malformed
    let dangling: Vec<&str> = warnings
        .iter()
        .filter(|w| w.category == LintCategory::Dangling)
        .map(|w| &source[w.span.clone()])
        .collect();
    assert_eq!(dangling, vec!["b(done)->c", "a->missing"]);
}

#[test]
fn test_clean_fixtures_have_no_warnings() {
    for source in [
        include_str!("fixtures/worked-example.dsl"),
        include_str!("fixtures/full-vocabulary.dsl"),
    ] {
        let warnings = lint::check(source);
        assert!(
            warnings.is_empty(),
            "Expected no warnings, got: {:?}",
            warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_lint_does_not_change_conversion() {
    let source = include_str!("fixtures/messy.dsl");
    let before = convert(source);
    let _ = lint::check(source);
    assert_eq!(before, convert(source));
}

#[test]
fn test_lint_warning_format() {
    let source = include_str!("fixtures/messy.dsl");
    for w in lint::check(source) {
        let cat = w.category.to_string();
        assert!(
            ["skipped", "dangling", "duplicate", "reserved"].contains(&cat.as_str()),
            "Unexpected category: {}",
            cat
        );
        assert!(!w.message.is_empty(), "Warning message should not be empty");
        assert!(w.format(source, "messy.dsl").contains("messy.dsl"));
    }
}
