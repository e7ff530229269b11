//! Morphological tokens.
//!
//! Tokens are the output of the lexer and the input to grammar analysis.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use namegen_foundation::{CategoryAssignment, Error, Result};

use crate::span::Span;

/// Token kinds, in the order alternatives are produced for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// A word analysed morphologically (`W`).
    Word,
    /// A single letter followed by a dot, "J." (`I`).
    Initial,
    /// An academic or professional title, "Ing." (`T`).
    Title,
    /// A Roman numeral, "IV" or "IV." (`R`).
    RomanNumeral,
    /// A preposition, "z" in "Jan z Lipé" (`P`).
    Preposition,
    /// A conjunction (`C`).
    Conjunction,
    /// An uppercase abbreviation, "FC" (`A`).
    Abbreviation,
    /// A hyphen joining two parts of a name (`D`).
    Dash,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Word,
        Self::Initial,
        Self::Title,
        Self::RomanNumeral,
        Self::Preposition,
        Self::Conjunction,
        Self::Abbreviation,
        Self::Dash,
    ];

    /// Single-letter code used in production notation and lexicon data.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Word => 'W',
            Self::Initial => 'I',
            Self::Title => 'T',
            Self::RomanNumeral => 'R',
            Self::Preposition => 'P',
            Self::Conjunction => 'C',
            Self::Abbreviation => 'A',
            Self::Dash => 'D',
        }
    }

    /// Decodes a token kind code.
    ///
    /// # Errors
    /// Returns `MalformedNotation` for an unknown code.
    pub fn from_code(code: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::malformed_notation(code.to_string(), "unknown token kind"))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A segment of a name with its candidate category assignments.
///
/// The candidate list is never empty: a token the lexicon knows nothing about
/// carries a single empty assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MorphToken {
    kind: TokenKind,
    surface: String,
    span: Span,
    assignments: Arc<[CategoryAssignment]>,
}

impl MorphToken {
    /// Creates a token. An empty candidate list is replaced by one empty assignment.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        surface: impl Into<String>,
        span: Span,
        assignments: Arc<[CategoryAssignment]>,
    ) -> Self {
        let assignments = if assignments.is_empty() {
            Arc::from([CategoryAssignment::new()])
        } else {
            assignments
        };
        Self {
            kind,
            surface: surface.into(),
            span,
            assignments,
        }
    }

    /// The token kind.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text of the token as written in the name.
    #[must_use]
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Where the token sits in the raw name.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Candidate assignments, in lexicon order.
    #[must_use]
    pub fn assignments(&self) -> &[CategoryAssignment] {
        &self.assignments
    }

    /// True if the lexicon had nothing to say about this token.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.assignments.iter().all(CategoryAssignment::is_empty)
    }
}

impl fmt::Display for MorphToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.surface)?;
        let mut first = true;
        for assignment in self.assignments.iter().filter(|a| !a.is_empty()) {
            write!(f, "{}{assignment}", if first { "<" } else { "|" })?;
            first = false;
        }
        if !first {
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// One full tokenization of a name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<MorphToken>);

impl TokenSequence {
    /// Wraps tokens in reading order.
    #[must_use]
    pub fn new(tokens: Vec<MorphToken>) -> Self {
        Self(tokens)
    }

    /// Returns the token kinds in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.0.iter().map(MorphToken::kind).collect()
    }

    /// Returns the tokens.
    #[must_use]
    pub fn into_inner(self) -> Vec<MorphToken> {
        self.0
    }
}

impl Deref for TokenSequence {
    type Target = [MorphToken];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<MorphToken>> for TokenSequence {
    fn from(tokens: Vec<MorphToken>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
