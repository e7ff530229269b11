//! Guessing the type of a name from its shape.
//!
//! The guess only orders the grammars an unbound name is tried against; it
//! never decides acceptance.

use namegen_foundation::Gender;
use namegen_lexer::{MorphToken, TokenKind, TokenSequence};
use tracing::trace;

use crate::name_type::NameType;

/// Guesses the name type from the first token sequence.
///
/// Abbreviations suggest a team and prepositions a location. Titles,
/// initials, regnal numerals and multi-word names suggest a person, female
/// when the last word can be feminine. A single word is taken for a surname.
#[must_use]
pub fn guess_type(alternatives: &[TokenSequence]) -> NameType {
    let Some(tokens) = alternatives.first() else {
        return NameType::Surname;
    };
    let has = |kind: TokenKind| tokens.iter().any(|token| token.kind() == kind);
    let words: Vec<&MorphToken> = tokens
        .iter()
        .filter(|token| token.kind() == TokenKind::Word)
        .collect();

    let guess = if has(TokenKind::Abbreviation) {
        NameType::Team
    } else if has(TokenKind::Preposition) {
        NameType::Location
    } else if words.len() < 2
        && !(has(TokenKind::Title) || has(TokenKind::Initial) || has(TokenKind::RomanNumeral))
    {
        NameType::Surname
    } else if words.last().is_some_and(|word| can_be_feminine(word)) {
        NameType::FemalePerson
    } else {
        NameType::MalePerson
    };

    trace!(tokens = %tokens, %guess, "guessed name type");
    guess
}

fn can_be_feminine(token: &MorphToken) -> bool {
    token
        .assignments()
        .iter()
        .any(|assignment| assignment.gender() == Some(Gender::Feminine))
}
