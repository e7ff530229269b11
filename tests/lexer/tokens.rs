//! Integration tests for token readings with the built-in Czech lexicon

use namegen_foundation::{ErrorKind, Gender, PartOfSpeech};
use namegen_lexer::{Lexer, LexerConfig, Span, TokenKind};
use namegen_names::czech;

fn lexer() -> Lexer {
    Lexer::new(czech::lexicon().unwrap())
}

// =============================================================================
// Readings
// =============================================================================

#[test]
fn novak_is_one_word() {
    let sequences = lexer().tokens("Novák").unwrap();
    assert_eq!(sequences.len(), 1);
    let token = &sequences[0][0];
    assert_eq!(token.kind(), TokenKind::Word);
    assert_eq!(token.span(), Span::new(0, "Novák".len()));
    assert_eq!(token.assignments()[0].gender(), Some(Gender::MasculineAnimate));
    assert_eq!(token.assignments()[0].part_of_speech(), Some(PartOfSpeech::Noun));
}

#[test]
fn lexicon_words_take_precedence_over_suffixes() {
    // "Jana" ends in "a" but the lexicon lists it as feminine only.
    let sequences = lexer().tokens("Jana").unwrap();
    assert_eq!(sequences[0][0].assignments().len(), 1);
    assert_eq!(sequences[0][0].assignments()[0].lntrf(), "k1gFnSc1");
}

#[test]
fn suffix_readings_keep_every_candidate() {
    let sequences = lexer().tokens("Svoboda").unwrap();
    let tags: Vec<String> = sequences[0][0].assignments().iter().map(|a| a.lntrf()).collect();
    assert_eq!(tags, vec!["k1gFnSc1", "k1gMnSc1"]);
}

#[test]
fn person_with_title_and_initial() {
    let sequences = lexer().tokens("Ing. J. Novák").unwrap();
    assert_eq!(
        sequences[0].kinds(),
        vec![TokenKind::Title, TokenKind::Initial, TokenKind::Word]
    );
}

#[test]
fn regnal_numeral_is_ambiguous_with_abbreviation() {
    let sequences = lexer().tokens("Jan IV").unwrap();
    let second: Vec<TokenKind> = sequences.iter().map(|s| s[1].kind()).collect();
    assert_eq!(second, vec![TokenKind::RomanNumeral, TokenKind::Abbreviation]);
}

#[test]
fn preposition_and_hyphen() {
    let sequences = lexer().tokens("Lhota u Kolína").unwrap();
    assert_eq!(
        sequences[0].kinds(),
        vec![TokenKind::Word, TokenKind::Preposition, TokenKind::Word]
    );

    let sequences = lexer().tokens("Svobodová-Nováková").unwrap();
    assert_eq!(
        sequences[0].kinds(),
        vec![TokenKind::Word, TokenKind::Dash, TokenKind::Word]
    );
}

#[test]
fn display() {
    let sequences = lexer().tokens("Ing. Novák").unwrap();
    assert_eq!(sequences[0].to_string(), "T:Ing. W:Novák<k1gMnSc1>");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unsupported_symbol_is_unlexable() {
    let err = lexer().tokens("Novák ©").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnlexableInput {
            input: "Novák ©".to_string(),
            position: "Novák ".len(),
            character: Some('©'),
        }
    );
}

#[test]
fn digits_and_foreign_letters_are_unlexable() {
    assert!(matches!(
        lexer().tokens("Karel 4").unwrap_err().kind,
        ErrorKind::UnlexableInput { character: Some('4'), .. }
    ));
    assert!(lexer().tokens("Müller").is_err());

    let german = Lexer::with_config(czech::lexicon().unwrap(), LexerConfig::central_european());
    assert!(german.tokens("Müller").is_ok());
}

#[test]
fn empty_input_is_unlexable() {
    for input in ["", " ", "\t\n"] {
        assert!(matches!(
            lexer().tokens(input).unwrap_err().kind,
            ErrorKind::UnlexableInput { position: 0, character: None, .. }
        ));
    }
}
