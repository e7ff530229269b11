//! The name entity.

use std::fmt;
use std::sync::{Arc, OnceLock};

use namegen_foundation::{Case, Error, Result};
use namegen_grammar::{Analysis, Grammar, ParseResult};
use namegen_lexer::{Lexer, TokenSequence};
use tracing::debug;

use crate::config::NameConfig;
use crate::guess::guess_type;
use crate::language::Language;
use crate::name_type::NameType;

/// A name accepted by one of the language's grammars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameAnalysis {
    name_type: NameType,
    result: ParseResult,
}

impl NameAnalysis {
    /// The name type whose grammar accepted the name.
    #[must_use]
    pub fn name_type(&self) -> NameType {
        self.name_type
    }

    /// The grammar's parse result.
    #[must_use]
    pub fn result(&self) -> &ParseResult {
        &self.result
    }

    /// Identifier of the matched production.
    #[must_use]
    pub fn production(&self) -> &str {
        self.result.production()
    }
}

/// A raw name in a language, optionally bound to a name type.
///
/// The raw string never changes. Tokens, the guessed type and the analysis
/// are computed on first use and kept, so a `Name` can be asked repeatedly
/// and shared between threads.
#[derive(Debug)]
pub struct Name {
    raw: String,
    language: Arc<Language>,
    name_type: Option<NameType>,
    config: NameConfig,
    tokens: OnceLock<Result<Vec<TokenSequence>>>,
    guessed: OnceLock<NameType>,
    analysis: OnceLock<Result<NameAnalysis>>,
}

impl Name {
    /// Creates a name of unknown type.
    #[must_use]
    pub fn new(raw: impl Into<String>, language: Arc<Language>) -> Self {
        Self {
            raw: raw.into(),
            language,
            name_type: None,
            config: NameConfig::default(),
            tokens: OnceLock::new(),
            guessed: OnceLock::new(),
            analysis: OnceLock::new(),
        }
    }

    /// Builder method to bind the name type.
    #[must_use]
    pub fn with_type(mut self, name_type: NameType) -> Self {
        self.name_type = Some(name_type);
        self.analysis = OnceLock::new();
        self
    }

    /// Builder method to set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: NameConfig) -> Self {
        self.config = config;
        self.analysis = OnceLock::new();
        self
    }

    /// The name as given.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The language the name is analysed in.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    /// The bound name type, if any.
    #[must_use]
    pub fn name_type(&self) -> Option<NameType> {
        self.name_type
    }

    /// The language's lexer.
    #[must_use]
    pub fn lex(&self) -> &Lexer {
        self.language.lex()
    }

    /// Alternative token sequences of the name.
    ///
    /// # Errors
    /// Returns `UnlexableInput` if the lexer cannot cover the name.
    pub fn tokens(&self) -> Result<&[TokenSequence]> {
        match self.tokens.get_or_init(|| self.lex().tokens(&self.raw)) {
            Ok(tokens) => Ok(tokens),
            Err(err) => Err(err.clone()),
        }
    }

    /// Guesses the name type from the shape of the given tokens.
    #[must_use]
    pub fn guess_type(&self, tokens: &[TokenSequence]) -> NameType {
        guess_type(tokens)
    }

    /// Guesses the name type from the name's own tokens, once.
    ///
    /// # Errors
    /// Returns `UnlexableInput` if the lexer cannot cover the name.
    pub fn guessed_type(&self) -> Result<NameType> {
        if let Some(&guessed) = self.guessed.get() {
            return Ok(guessed);
        }
        let tokens = self.tokens()?;
        Ok(*self.guessed.get_or_init(|| guess_type(tokens)))
    }

    /// The grammar of the bound type, or of the guessed type if unbound.
    ///
    /// # Errors
    /// Returns `UnlexableInput` when guessing needs tokens that cannot be
    /// produced, and `InvalidGrammar` when the language has no grammar for
    /// the type.
    pub fn grammar(&self) -> Result<&Grammar> {
        let name_type = match self.name_type {
            Some(name_type) => name_type,
            None => self.guessed_type()?,
        };
        self.grammar_of(name_type)
    }

    /// Analyses the name with its own configuration, once.
    ///
    /// # Errors
    /// Returns `NotInLanguage` when no grammar accepts the name, see
    /// [`Name::analyse_with`].
    pub fn analyse(&self) -> Result<NameAnalysis> {
        self.analysis
            .get_or_init(|| self.analyse_with(&self.config))
            .clone()
    }

    /// Analyses the name.
    ///
    /// A name with a bound type is analysed with that type's grammar only.
    /// An unbound name tries every grammar of the language; with guessing on,
    /// the guessed type goes first and the rest follow in declared order.
    ///
    /// # Errors
    /// Returns `UnlexableInput` if the name cannot be tokenized,
    /// `InvalidGrammar` if a bound type has no grammar, and `NotInLanguage`
    /// when no grammar accepts the name.
    pub fn analyse_with(&self, config: &NameConfig) -> Result<NameAnalysis> {
        let tokens = self.tokens()?;

        let order: Vec<NameType> = match self.name_type {
            Some(name_type) => vec![name_type],
            None if config.guess_type => {
                let guessed = self.guessed_type()?;
                std::iter::once(guessed)
                    .chain(self.language.name_types().filter(|&t| t != guessed))
                    .collect()
            }
            None => self.language.name_types().collect(),
        };

        let mut rejected = Vec::with_capacity(order.len());
        for name_type in order {
            let grammar = match self.grammar_of(name_type) {
                Ok(grammar) => grammar,
                Err(err) if self.name_type.is_some() => return Err(err),
                Err(_) => continue,
            };
            match grammar.analyse(tokens) {
                Analysis::Match(result) => {
                    debug!(name = %self.raw, %name_type, production = result.production(), "name analysed");
                    return Ok(NameAnalysis { name_type, result });
                }
                Analysis::NotInLanguage { grammar } => rejected.push(grammar),
            }
        }

        debug!(name = %self.raw, "name rejected by every grammar");
        Err(Error::not_in_language(rejected.join(", ")))
    }

    /// The name inflected into `case`.
    ///
    /// # Errors
    /// Fails when the name cannot be analysed.
    pub fn inflect(&self, case: Case) -> Result<String> {
        let analysis = self.analyse()?;
        let grammar = self.grammar_of(analysis.name_type)?;
        Ok(grammar.inflect(&self.raw, &analysis.result, case))
    }

    /// The name in all seven cases, nominative first.
    ///
    /// # Errors
    /// Fails when the name cannot be analysed.
    pub fn forms(&self) -> Result<Vec<(Case, String)>> {
        let analysis = self.analyse()?;
        let grammar = self.grammar_of(analysis.name_type)?;
        Ok(grammar.forms(&self.raw, &analysis.result))
    }

    fn grammar_of(&self, name_type: NameType) -> Result<&Grammar> {
        self.language.grammar(name_type).ok_or_else(|| {
            Error::invalid_grammar(format!(
                "language {} has no {name_type} grammar",
                self.language.code()
            ))
        })
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
