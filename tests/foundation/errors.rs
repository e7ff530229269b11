//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use namegen_foundation::{Error, ErrorContext, ErrorKind, MorphCategoryKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_category_value() {
    let err = Error::invalid_category_value(MorphCategoryKind::Case, "9");
    let msg = format!("{err}");
    assert!(msg.contains("\"9\""));
    assert!(msg.contains("case"));
}

#[test]
fn error_unlexable_input() {
    let err = Error::unlexable_input("Nov@k", 3, Some('@'));
    let msg = format!("{err}");
    assert!(msg.contains("Nov@k"));
    assert!(msg.contains('3'));
    assert!(msg.contains("'@'"));

    let empty = Error::unlexable_input("", 0, None);
    assert!(format!("{empty}").contains("empty input"));
}

#[test]
fn error_not_in_language_is_distinguished() {
    let err = Error::not_in_language("team");
    assert!(err.is_not_in_language());
    assert!(format!("{err}").contains("team"));

    assert!(!Error::invalid_category_kind("z").is_not_in_language());
    assert!(!Error::unlexable_input("@", 0, Some('@')).is_not_in_language());
}

#[test]
fn error_unknown_name_type() {
    let err = Error::unknown_name_type("X");
    assert_eq!(err.kind, ErrorKind::UnknownNameType("X".to_string()));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_with_context() {
    let err = Error::invalid_grammar("no productions")
        .with_context(ErrorContext::new().with_source("surname").with_line(4));
    assert!(format!("{err}").contains("no productions"));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(4));
    assert_eq!(context.to_string(), "in surname at line 4");
}

#[test]
fn errors_are_cloneable() {
    let err = Error::malformed_notation("gMc", "missing value code");
    let copy = err.clone();
    assert_eq!(copy.kind, err.kind);
}
