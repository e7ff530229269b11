//! Error types for namegen.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! [`ErrorKind::NotInLanguage`] is an expected outcome of grammar analysis and
//! is kept apart from the kinds that mean the engine cannot proceed.

use std::fmt;

use thiserror::Error;

use crate::category::MorphCategoryKind;

/// The main error type for namegen operations.
#[derive(Clone, Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown category kind code error.
    #[must_use]
    pub fn invalid_category_kind(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCategoryKind(code.into()))
    }

    /// Creates an unknown category value code error.
    #[must_use]
    pub fn invalid_category_value(kind: MorphCategoryKind, code: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidCategoryValue {
            kind,
            code: code.into(),
        })
    }

    /// Creates a duplicate category kind error.
    #[must_use]
    pub fn duplicate_category_kind(kind: MorphCategoryKind) -> Self {
        Self::new(ErrorKind::DuplicateCategoryKind(kind))
    }

    /// Creates a malformed notation error.
    #[must_use]
    pub fn malformed_notation(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedNotation {
            input: input.into(),
            message: message.into(),
        })
    }

    /// Creates an unlexable input error.
    #[must_use]
    pub fn unlexable_input(input: impl Into<String>, position: usize, character: Option<char>) -> Self {
        Self::new(ErrorKind::UnlexableInput {
            input: input.into(),
            position,
            character,
        })
    }

    /// Creates an error for a name with more readings than the lexer keeps.
    #[must_use]
    pub fn too_ambiguous(input: impl Into<String>, alternatives: usize, limit: usize) -> Self {
        Self::new(ErrorKind::TooAmbiguous {
            input: input.into(),
            alternatives,
            limit,
        })
    }

    /// Creates a not-in-language error.
    #[must_use]
    pub fn not_in_language(grammar: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotInLanguage(grammar.into()))
    }

    /// Creates an invalid grammar error.
    #[must_use]
    pub fn invalid_grammar(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidGrammar(message.into()))
    }

    /// Creates an unknown name type error.
    #[must_use]
    pub fn unknown_name_type(code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownNameType(code.into()))
    }

    /// Returns true if this is the recoverable "name does not fit" outcome.
    #[must_use]
    pub fn is_not_in_language(&self) -> bool {
        matches!(self.kind, ErrorKind::NotInLanguage(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Compact code does not name any category kind.
    #[error("invalid morphological category: {0:?}")]
    InvalidCategoryKind(String),

    /// Compact code is not registered for the given kind.
    #[error("invalid value {code:?} for morphological category {kind}")]
    InvalidCategoryValue {
        /// The kind the code was decoded for.
        kind: MorphCategoryKind,
        /// The offending value code.
        code: String,
    },

    /// The same kind appears twice in one assignment.
    #[error("morphological category {0} appears more than once")]
    DuplicateCategoryKind(MorphCategoryKind),

    /// lntrf text that cannot be split into kind/value pairs.
    #[error("malformed lntrf notation {input:?}: {message}")]
    MalformedNotation {
        /// The text being decoded.
        input: String,
        /// What is wrong with it.
        message: String,
    },

    /// The raw name cannot be covered by any token sequence.
    #[error("cannot lex {input:?} at byte {position}{}", fmt_char(.character))]
    UnlexableInput {
        /// The raw input.
        input: String,
        /// Byte offset of the first uncoverable character.
        position: usize,
        /// The uncoverable character, `None` for empty input.
        character: Option<char>,
    },

    /// The name has more alternative token sequences than the configured
    /// limit. None of them is dropped silently.
    #[error("{input:?} has {alternatives} readings, more than the limit of {limit}")]
    TooAmbiguous {
        /// The raw input.
        input: String,
        /// Number of alternative token sequences the name has.
        alternatives: usize,
        /// The configured limit.
        limit: usize,
    },

    /// No production of the grammar matches any candidate tokenization.
    #[error("name is not in the language of grammar {0}")]
    NotInLanguage(String),

    /// Grammar data is inconsistent or cannot be parsed.
    #[error("invalid grammar: {0}")]
    InvalidGrammar(String),

    /// Name type code is not known.
    #[error("unknown name type: {0:?}")]
    UnknownNameType(String),
}

fn fmt_char(character: &Option<char>) -> String {
    match character {
        Some(c) => format!(" (unsupported character {c:?})"),
        None => " (empty input)".to_string(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Grammar, lexicon or input the error came from.
    pub source: Option<String>,
    /// Line number in source (1-based).
    pub line: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(line) = self.line {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at line {line}")?;
        }
        Ok(())
    }
}
