//! Integration tests for name filters

use std::sync::Arc;

use namegen_foundation::{ErrorKind, Result};
use namegen_lexer::{Lexer, LexerConfig};
use namegen_names::{
    AllOf, AlphabetFilter, Filter, GrammarFilter, Language, LanguageFilter, Name, NamesFilter,
    NameType, RegexFilter, ScriptFilter, czech,
};
use regex::Regex;

const CZECH_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzáčďéěíňóřšťúůýž";

/// Keeps names with at most a number of tokens.
struct MaxTokens(usize);

impl Filter for MaxTokens {
    fn accepts(&self, name: &Name) -> Result<bool> {
        Ok(name.tokens()?.iter().all(|tokens| tokens.len() <= self.0))
    }
}

fn accepted<'a>(filter: &impl Filter, language: &Arc<Language>, raws: &[&'a str]) -> Vec<&'a str> {
    raws.iter()
        .copied()
        .filter(|raw| filter.accepts(&Name::new(*raw, Arc::clone(language))).unwrap())
        .collect()
}

#[test]
fn composed_filters_keep_declinable_czech_names() {
    let language = Arc::new(czech::language().unwrap());
    let filter = AllOf::new()
        .with(
            NamesFilter::new()
                .with_languages(LanguageFilter::new(["cs"]))
                .with_regex(RegexFilter::new(Regex::new(r"\p{Lu}").unwrap()))
                .with_alphabet(AlphabetFilter::new(CZECH_LETTERS.chars())),
        )
        .with(GrammarFilter::default());

    // The alphabet filter drops "Müller" before the lexer would fail on it.
    let raws = ["Novák", "Xyzzy", "von Novák", "Müller", "Jana Nováková", "Lhota u Kolína"];
    assert_eq!(
        accepted(&filter, &language, &raws),
        vec!["Novák", "Jana Nováková", "Lhota u Kolína"]
    );
}

#[test]
fn language_filter_uses_the_name_language() {
    let czech = Arc::new(czech::language().unwrap());
    let slovak = Arc::new(
        Language::new("sk", Lexer::new(czech::lexicon().unwrap()))
            .with_grammar(NameType::Surname, czech::grammar(NameType::Surname).unwrap()),
    );
    let filter = LanguageFilter::new(["sk"]);
    assert!(!filter.accepts(&Name::new("Novák", czech)).unwrap());
    assert!(filter.accepts(&Name::new("Novák", slovak)).unwrap());
}

#[test]
fn grammar_filter_respects_bound_type() {
    let language = Arc::new(czech::language().unwrap());
    let filter = GrammarFilter::default();
    let praha = |name_type| Name::new("Praha", Arc::clone(&language)).with_type(name_type);
    assert!(filter.accepts(&praha(NameType::Location)).unwrap());
    assert!(!filter.accepts(&praha(NameType::Team)).unwrap());
}

#[test]
fn lexer_errors_reach_the_caller() {
    let language = Arc::new(czech::language().unwrap());
    let err = GrammarFilter::default()
        .accepts(&Name::new("Novák ©", Arc::clone(&language)))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnlexableInput { position: 7, .. }));

    // A wider letter set lets the same lexer data through.
    let central = Arc::new(czech::language_with(LexerConfig::central_european()).unwrap());
    assert!(GrammarFilter::default().accepts(&Name::new("Müller", central)).is_ok());
}

#[test]
fn ambiguity_errors_reach_the_caller() {
    let config = LexerConfig::default().with_max_alternatives(4);
    let narrow = Arc::new(czech::language_with(config).unwrap());
    let err = GrammarFilter::default()
        .accepts(&Name::new("MC CD XL DC LX Praha", Arc::clone(&narrow)))
        .unwrap_err();
    assert!(!err.is_not_in_language());
    assert!(matches!(
        err.kind,
        ErrorKind::TooAmbiguous {
            alternatives: 32,
            limit: 4,
            ..
        }
    ));

    let language = Arc::new(czech::language().unwrap());
    assert!(GrammarFilter::default()
        .accepts(&Name::new("MC CD XL DC LX Praha", language))
        .unwrap());
}

#[test]
fn script_filter_runs_before_the_lexer() {
    let language = Arc::new(czech::language().unwrap());
    let filter = AllOf::new()
        .with(NamesFilter::new().with_script(ScriptFilter::new("LATIN")))
        .with(GrammarFilter::default());

    // Cyrillic would be unlexable; the script filter drops it first.
    let raws = ["Jan Novák", "Иван Новак", "Jan Новак", "Karel IV."];
    assert_eq!(accepted(&filter, &language, &raws), vec!["Jan Novák", "Karel IV."]);
}

#[test]
fn custom_filters_compose() {
    let language = Arc::new(czech::language().unwrap());
    let filter = AllOf::new().with(MaxTokens(2)).with(GrammarFilter::default());
    assert_eq!(filter.len(), 2);
    assert_eq!(
        accepted(&filter, &language, &["Novák", "Jan Novák", "Ing. Jan Novák"]),
        vec!["Novák", "Jan Novák"]
    );
}
