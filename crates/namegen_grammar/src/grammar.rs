//! Grammar analysis.
//!
//! A grammar is an ordered set of productions for one name type. Analysis
//! tries the productions in declared order and, for each production, the
//! lexer's alternative token sequences in the order they were returned. The
//! first full match wins; nothing partial is ever reported.
//!
//! An element that names a declension only accepts words that declension
//! has a rule for, so the paradigm of a word is chosen by the productions.

use std::collections::HashMap;
use std::collections::HashSet;

use namegen_foundation::{Case, CategoryAssignment, Error, Gender, Number, Result};
use namegen_lexer::{MorphToken, TokenSequence};
use tracing::{debug, trace};

use crate::declension::Declension;
use crate::production::{PatternElement, Production};

/// How one token was matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenMatch {
    /// Index of the token in the matched sequence.
    pub token: usize,
    /// Index of the production element it filled.
    pub element: usize,
    /// The candidate assignment that was chosen.
    pub assignment: CategoryAssignment,
}

/// A successful analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseResult {
    production: String,
    production_index: usize,
    alternative: usize,
    tokens: TokenSequence,
    matches: Vec<TokenMatch>,
    bindings: CategoryAssignment,
}

impl ParseResult {
    /// Identifier of the matched production.
    #[must_use]
    pub fn production(&self) -> &str {
        &self.production
    }

    /// Position of the matched production in declared order.
    #[must_use]
    pub fn production_index(&self) -> usize {
        self.production_index
    }

    /// Index of the lexer alternative that matched.
    #[must_use]
    pub fn alternative(&self) -> usize {
        self.alternative
    }

    /// The matched token sequence.
    #[must_use]
    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// Chosen assignment and element for every token, in token order.
    #[must_use]
    pub fn matches(&self) -> &[TokenMatch] {
        &self.matches
    }

    /// Values settled by agreement.
    #[must_use]
    pub fn bindings(&self) -> CategoryAssignment {
        self.bindings
    }

    /// Gender settled by agreement.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        self.bindings.gender()
    }

    /// Number settled by agreement.
    #[must_use]
    pub fn number(&self) -> Option<Number> {
        self.bindings.number()
    }
}

/// Outcome of [`Grammar::analyse`].
///
/// Not matching is an ordinary outcome, so it is a variant rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Analysis {
    /// A production matched.
    Match(ParseResult),
    /// No production matches any alternative.
    NotInLanguage {
        /// Name of the grammar that rejected the name.
        grammar: String,
    },
}

impl Analysis {
    /// Returns true for a match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// Returns the parse result, if any.
    #[must_use]
    pub fn parse_result(&self) -> Option<&ParseResult> {
        match self {
            Self::Match(result) => Some(result),
            Self::NotInLanguage { .. } => None,
        }
    }

    /// Converts into a `Result`, mapping rejection to `NotInLanguage`.
    ///
    /// # Errors
    /// Returns `NotInLanguage` when no production matched.
    pub fn into_result(self) -> Result<ParseResult> {
        match self {
            Self::Match(result) => Ok(result),
            Self::NotInLanguage { grammar } => Err(Error::not_in_language(grammar)),
        }
    }
}

/// Builds a [`Grammar`], validating it once at the end.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    name: String,
    productions: Vec<Production>,
    declensions: Vec<Declension>,
}

impl GrammarBuilder {
    /// Creates a builder for a grammar called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a production; earlier productions take priority.
    #[must_use]
    pub fn production(mut self, production: Production) -> Self {
        self.productions.push(production);
        self
    }

    /// Appends every production of a notation block.
    ///
    /// # Errors
    /// Fails if the notation is malformed.
    pub fn productions_from_str(mut self, text: &str) -> Result<Self> {
        self.productions.extend(Production::parse_all(text)?);
        Ok(self)
    }

    /// Registers a declension.
    #[must_use]
    pub fn declension(mut self, declension: Declension) -> Self {
        self.declensions.push(declension);
        self
    }

    /// Validates and builds the grammar.
    ///
    /// # Errors
    /// Returns `InvalidGrammar` when the grammar has no productions, when a
    /// production id repeats, when a production has no elements, or when an
    /// element names an unknown declension.
    pub fn build(self) -> Result<Grammar> {
        let invalid = |message: String| Error::invalid_grammar(format!("{}: {message}", self.name));

        if self.productions.is_empty() {
            return Err(invalid("no productions".to_string()));
        }

        let mut declensions = HashMap::new();
        for declension in self.declensions {
            let name = declension.name().to_string();
            if declensions.insert(name.clone(), declension).is_some() {
                return Err(invalid(format!("declension {name} defined twice")));
            }
        }

        let mut ids = HashSet::new();
        for production in &self.productions {
            if !ids.insert(production.id.as_str()) {
                return Err(invalid(format!("production {} defined twice", production.id)));
            }
            if production.elements.is_empty() {
                return Err(invalid(format!("production {} has no elements", production.id)));
            }
            for element in &production.elements {
                if let Some(name) = &element.declension {
                    if !declensions.contains_key(name) {
                        return Err(invalid(format!(
                            "production {} uses unknown declension {name}",
                            production.id
                        )));
                    }
                }
            }
        }

        Ok(Grammar {
            name: self.name,
            productions: self.productions,
            declensions,
        })
    }
}

/// An immutable set of productions for one name type.
#[derive(Clone, Debug)]
pub struct Grammar {
    name: String,
    productions: Vec<Production>,
    declensions: HashMap<String, Declension>,
}

impl Grammar {
    /// Starts building a grammar.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder::new(name)
    }

    /// The grammar name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Productions in priority order.
    #[must_use]
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Looks up a declension by name.
    #[must_use]
    pub fn declension(&self, name: &str) -> Option<&Declension> {
        self.declensions.get(name)
    }

    /// Analyses the lexer's alternatives against this grammar.
    #[must_use]
    pub fn analyse(&self, alternatives: &[TokenSequence]) -> Analysis {
        for (production_index, production) in self.productions.iter().enumerate() {
            for (alternative, tokens) in alternatives.iter().enumerate() {
                let matcher = Matcher::new(production, &self.declensions, tokens);
                if let Some((matches, bindings)) = matcher.run() {
                    debug!(
                        grammar = %self.name,
                        production = %production.id,
                        alternative,
                        "name matched"
                    );
                    return Analysis::Match(ParseResult {
                        production: production.id.clone(),
                        production_index,
                        alternative,
                        tokens: tokens.clone(),
                        matches,
                        bindings,
                    });
                }
                trace!(production = %production.id, alternative, "no match");
            }
        }
        debug!(grammar = %self.name, alternatives = alternatives.len(), "name not in language");
        Analysis::NotInLanguage {
            grammar: self.name.clone(),
        }
    }

    /// Inflects `raw` into `case` following a parse result obtained for it.
    ///
    /// Tokens filled by elements with a declension are replaced by their
    /// declined form; everything else, separators included, is kept. A result
    /// produced by a different grammar leaves `raw` unchanged.
    #[must_use]
    pub fn inflect(&self, raw: &str, result: &ParseResult, case: Case) -> String {
        let Some(production) = self
            .productions
            .get(result.production_index)
            .filter(|production| production.id == result.production)
        else {
            return raw.to_string();
        };

        let mut out = String::with_capacity(raw.len() + 8);
        let mut last = 0;
        for token_match in &result.matches {
            let Some(token) = result.tokens.get(token_match.token) else {
                continue;
            };
            let span = token.span();
            out.push_str(raw.get(last..span.start).unwrap_or_default());
            let declined = production
                .elements
                .get(token_match.element)
                .and_then(|element| element.declension.as_deref())
                .and_then(|name| self.declensions.get(name))
                .and_then(|declension| declension.decline(token.surface(), case));
            out.push_str(declined.as_deref().unwrap_or(token.surface()));
            last = span.end;
        }
        out.push_str(raw.get(last..).unwrap_or_default());
        out
    }

    /// Inflects `raw` into all seven cases, nominative first.
    #[must_use]
    pub fn forms(&self, raw: &str, result: &ParseResult) -> Vec<(Case, String)> {
        Case::ALL
            .iter()
            .map(|&case| (case, self.inflect(raw, result, case)))
            .collect()
    }
}

/// Backtracking matcher of one production against one token sequence.
///
/// Repetitions are greedy; candidate assignments are tried in lexer order.
struct Matcher<'a> {
    production: &'a Production,
    declensions: &'a HashMap<String, Declension>,
    tokens: &'a TokenSequence,
    matches: Vec<TokenMatch>,
}

impl<'a> Matcher<'a> {
    fn new(
        production: &'a Production,
        declensions: &'a HashMap<String, Declension>,
        tokens: &'a TokenSequence,
    ) -> Self {
        Self {
            production,
            declensions,
            tokens,
            matches: Vec::with_capacity(tokens.len()),
        }
    }

    fn run(mut self) -> Option<(Vec<TokenMatch>, CategoryAssignment)> {
        let bindings = self.step(0, 0, 0, CategoryAssignment::new())?;
        Some((self.matches, bindings))
    }

    /// Matches from element `element` (already repeated `count` times) and token `token`.
    fn step(
        &mut self,
        element: usize,
        token: usize,
        count: usize,
        bindings: CategoryAssignment,
    ) -> Option<CategoryAssignment> {
        let Some(pattern) = self.production.elements.get(element) else {
            return (token == self.tokens.len()).then_some(bindings);
        };

        if count < pattern.repeat.max() {
            if let Some(candidate) = self.tokens.get(token) {
                if self.accepts(pattern, candidate) {
                    for assignment in candidate.assignments() {
                        if !assignment.satisfies(&pattern.constraint) {
                            continue;
                        }
                        let next = if pattern.agrees {
                            match bindings.unify(&assignment.restrict(&self.production.agree)) {
                                Some(next) => next,
                                None => continue,
                            }
                        } else {
                            bindings
                        };
                        self.matches.push(TokenMatch {
                            token,
                            element,
                            assignment: *assignment,
                        });
                        if let Some(done) = self.step(element, token + 1, count + 1, next) {
                            return Some(done);
                        }
                        self.matches.pop();
                    }
                }
            }
        }

        if count >= pattern.repeat.min() {
            return self.step(element + 1, token, 0, bindings);
        }
        None
    }

    fn accepts(&self, pattern: &PatternElement, token: &MorphToken) -> bool {
        pattern.accepts_kind(token.kind())
            && pattern.declension.as_ref().is_none_or(|name| {
                self.declensions
                    .get(name)
                    .is_some_and(|declension| declension.declines(token.surface()))
            })
    }
}
