//! Integration tests for production notation

use namegen_foundation::ErrorKind;
use namegen_grammar::{Grammar, Production};
use namegen_names::czech;

#[test]
fn builtin_productions_print_as_written() {
    for (name_type, text) in czech::PRODUCTIONS {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let productions = Production::parse_all(text).unwrap();
        assert_eq!(productions.len(), lines.len(), "{name_type}");

        for (production, line) in productions.iter().zip(lines) {
            assert_eq!(production.to_string(), line);
            assert_eq!(&line.parse::<Production>().unwrap(), production);
        }
    }
}

#[test]
fn grammar_keeps_declared_order() {
    let grammar = czech::grammar(namegen_names::NameType::Surname).unwrap();
    let ids: Vec<&str> = grammar.productions().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "feminine-adjectival",
            "masculine-adjectival",
            "masculine-a",
            "masculine-animate",
            "double-barrelled-feminine",
            "double-barrelled-masculine",
        ]
    );
}

#[test]
fn parse_errors_name_the_line() {
    let err = Grammar::builder("broken")
        .productions_from_str(
            "
            # comment
            good := W
            bad = W
            ",
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedNotation { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.line, Some(4));
    assert_eq!(context.source.as_deref(), Some("productions"));
}

#[test]
fn invalid_constraint_is_a_category_error() {
    let err = Grammar::builder("broken")
        .productions_from_str("bad := W<gX>")
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidCategoryValue { .. }));
}

#[test]
fn unknown_declension_is_rejected_at_build() {
    let err = Grammar::builder("broken")
        .productions_from_str("a := W:nowhere")
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidGrammar(_)));
}
