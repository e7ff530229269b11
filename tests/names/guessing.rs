//! Integration tests for name type guessing

use std::sync::Arc;

use namegen_lexer::Lexer;
use namegen_names::{Name, NameConfig, NameType, czech, guess_type};

fn guess(raw: &str) -> NameType {
    let lexer = Lexer::new(czech::lexicon().unwrap());
    guess_type(&lexer.tokens(raw).unwrap())
}

#[test]
fn guesses_from_shape() {
    assert_eq!(guess("Novák"), NameType::Surname);
    assert_eq!(guess("Jan Novák"), NameType::MalePerson);
    assert_eq!(guess("Karel IV."), NameType::MalePerson);
    assert_eq!(guess("Ing. Novák"), NameType::MalePerson);
    assert_eq!(guess("Jana Nováková"), NameType::FemalePerson);
    assert_eq!(guess("Lhota u Kolína"), NameType::Location);
    assert_eq!(guess("FK Teplice"), NameType::Team);
}

#[test]
fn wrong_guess_does_not_reject() {
    let language = Arc::new(czech::language().unwrap());
    let name = Name::new("Jiří z Poděbrad", Arc::clone(&language));
    assert_eq!(name.guessed_type().unwrap(), NameType::Location);

    let guessed = name.analyse().unwrap();
    let unguessed = name.analyse_with(&NameConfig::without_guessing()).unwrap();
    assert_eq!(guessed.name_type(), NameType::MalePerson);
    assert_eq!(guessed, unguessed);
}

#[test]
fn guessing_changes_only_the_order() {
    // Without a guess, declared order puts the male person grammar before
    // the surname grammar, so a lone masculine word is read as a given name.
    let language = Arc::new(czech::language().unwrap());
    let guessed = Name::new("Novák", Arc::clone(&language));
    let unguessed = Name::new("Novák", language).with_config(NameConfig::without_guessing());

    assert_eq!(guessed.analyse().unwrap().name_type(), NameType::Surname);
    let analysis = unguessed.analyse().unwrap();
    assert_eq!(analysis.name_type(), NameType::MalePerson);
    assert_eq!(analysis.production(), "full");
}

#[test]
fn guessing_does_not_bind_the_type() {
    let name = Name::new("Lhota u Kolína", Arc::new(czech::language().unwrap()));
    assert_eq!(name.guessed_type().unwrap(), NameType::Location);
    assert_eq!(name.name_type(), None);
    assert_eq!(name.grammar().unwrap().name(), "location");
}
