//! Languages: one lexer and a grammar per name type.

use std::collections::BTreeMap;
use std::fmt;

use namegen_grammar::Grammar;
use namegen_lexer::Lexer;

use crate::name_type::NameType;

/// A language names are analysed in.
///
/// Built once and shared between names, usually behind an `Arc`. Nothing in
/// it changes after construction apart from the lexer's cache.
#[derive(Debug)]
pub struct Language {
    code: String,
    lexer: Lexer,
    grammars: BTreeMap<NameType, Grammar>,
}

impl Language {
    /// Creates a language without grammars.
    #[must_use]
    pub fn new(code: impl Into<String>, lexer: Lexer) -> Self {
        Self {
            code: code.into(),
            lexer,
            grammars: BTreeMap::new(),
        }
    }

    /// Builder method to set the grammar of a name type, replacing any earlier one.
    #[must_use]
    pub fn with_grammar(mut self, name_type: NameType, grammar: Grammar) -> Self {
        self.grammars.insert(name_type, grammar);
        self
    }

    /// Language code, e.g. "cs".
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The lexer.
    #[must_use]
    pub fn lex(&self) -> &Lexer {
        &self.lexer
    }

    /// Grammar for a name type, if the language has one.
    #[must_use]
    pub fn grammar(&self, name_type: NameType) -> Option<&Grammar> {
        self.grammars.get(&name_type)
    }

    /// Name types with a grammar, in declared order.
    pub fn name_types(&self) -> impl Iterator<Item = NameType> + '_ {
        self.grammars.keys().copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
