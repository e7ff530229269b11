//! Filters deciding which names to keep.
//!
//! A filter is a predicate over a [`Name`]. Filters compose by conjunction,
//! evaluated in order and stopping at the first rejection. A missing part of
//! a composite filter accepts everything.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock};

use namegen_foundation::Result;
use regex::Regex;
use tracing::trace;

use crate::config::NameConfig;
use crate::name::Name;

/// A predicate over names.
///
/// Only grammar filtering can fail: grammar rejection is `Ok(false)`, while
/// a name the lexer cannot cover is an error passed on to the caller.
pub trait Filter {
    /// Returns true if the name passes the filter.
    ///
    /// # Errors
    /// Returns errors that are not a plain rejection, such as `UnlexableInput`.
    fn accepts(&self, name: &Name) -> Result<bool>;
}

/// An absent filter accepts every name.
impl<F: Filter> Filter for Option<F> {
    fn accepts(&self, name: &Name) -> Result<bool> {
        match self {
            Some(filter) => filter.accepts(name),
            None => Ok(true),
        }
    }
}

/// Keeps names whose language code is in a set.
#[derive(Clone, Debug)]
pub struct LanguageFilter {
    codes: HashSet<String>,
}

impl LanguageFilter {
    /// Creates a filter accepting the given language codes.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for LanguageFilter {
    fn accepts(&self, name: &Name) -> Result<bool> {
        Ok(self.codes.contains(name.language().code()))
    }
}

/// Keeps names matching a regular expression at their start.
#[derive(Clone, Debug)]
pub struct RegexFilter {
    regex: Regex,
}

impl RegexFilter {
    /// Creates a filter from a compiled expression.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }
}

impl Filter for RegexFilter {
    fn accepts(&self, name: &Name) -> Result<bool> {
        Ok(self
            .regex
            .find(name.raw())
            .is_some_and(|found| found.start() == 0))
    }
}

/// Keeps names whose letters all come from an alphabet. Other characters
/// are not checked.
#[derive(Clone, Debug)]
pub struct AlphabetFilter {
    letters: HashSet<char>,
    case_insensitive: bool,
}

impl AlphabetFilter {
    /// Creates a case-insensitive filter.
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters.into_iter().flat_map(char::to_uppercase).collect(),
            case_insensitive: true,
        }
    }

    /// Creates a filter that tells upper and lower case apart.
    pub fn case_sensitive(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters.into_iter().collect(),
            case_insensitive: false,
        }
    }

    fn allows(&self, c: char) -> bool {
        if !c.is_alphabetic() {
            return true;
        }
        if self.case_insensitive {
            c.to_uppercase().all(|upper| self.letters.contains(&upper))
        } else {
            self.letters.contains(&c)
        }
    }
}

impl Filter for AlphabetFilter {
    fn accepts(&self, name: &Name) -> Result<bool> {
        Ok(name.raw().chars().all(|c| self.allows(c)))
    }
}

/// Keeps names whose letters all belong to one Unicode script, judged by
/// the character's Unicode name ("LATIN SMALL LETTER A WITH ACUTE").
/// Characters that are not letters are not checked.
///
/// Verdicts are cached per character and the cache is shared between clones.
#[derive(Clone, Debug)]
pub struct ScriptFilter {
    script: String,
    cache: Arc<RwLock<HashMap<char, bool>>>,
}

impl ScriptFilter {
    /// Creates a filter for a script such as `"LATIN"` or `"CYRILLIC"`.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into().to_uppercase(),
            cache: Arc::default(),
        }
    }

    /// The script letters must belong to.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Number of characters with a cached verdict.
    #[must_use]
    pub fn cached_chars(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn allows(&self, c: char) -> bool {
        if !c.is_alphabetic() {
            return true;
        }
        if let Some(&allowed) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&c) {
            return allowed;
        }
        let allowed =
            unicode_names2::name(c).is_some_and(|name| name.to_string().contains(&self.script));
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(c, allowed);
        allowed
    }
}

impl Filter for ScriptFilter {
    fn accepts(&self, name: &Name) -> Result<bool> {
        Ok(name.raw().chars().all(|c| self.allows(c)))
    }
}

/// Keeps names that one of their language's grammars accepts.
#[derive(Clone, Copy, Debug, Default)]
pub struct GrammarFilter {
    config: NameConfig,
}

impl GrammarFilter {
    /// Creates a grammar filter.
    #[must_use]
    pub fn new(config: NameConfig) -> Self {
        Self { config }
    }
}

impl Filter for GrammarFilter {
    fn accepts(&self, name: &Name) -> Result<bool> {
        match name.analyse_with(&self.config) {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_in_language() => {
                trace!(name = %name, "filtered out by grammar");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}

/// Conjunction of an ordered list of filters.
#[derive(Default)]
pub struct AllOf {
    filters: Vec<Box<dyn Filter + Send + Sync>>,
}

impl AllOf {
    /// Creates an empty conjunction, which accepts every name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a filter.
    #[must_use]
    pub fn with(mut self, filter: impl Filter + Send + Sync + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if there are no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for AllOf {
    fn accepts(&self, name: &Name) -> Result<bool> {
        for filter in &self.filters {
            if !filter.accepts(name)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Filters names by language, shape, script and alphabet. Unset parts
/// accept every name.
#[derive(Clone, Debug, Default)]
pub struct NamesFilter {
    languages: Option<LanguageFilter>,
    regex: Option<RegexFilter>,
    script: Option<ScriptFilter>,
    alphabet: Option<AlphabetFilter>,
}

impl NamesFilter {
    /// Creates a filter that accepts every name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to restrict languages.
    #[must_use]
    pub fn with_languages(mut self, languages: LanguageFilter) -> Self {
        self.languages = Some(languages);
        self
    }

    /// Builder method to restrict the shape of the raw name.
    #[must_use]
    pub fn with_regex(mut self, regex: RegexFilter) -> Self {
        self.regex = Some(regex);
        self
    }

    /// Builder method to restrict the script of letters.
    #[must_use]
    pub fn with_script(mut self, script: ScriptFilter) -> Self {
        self.script = Some(script);
        self
    }

    /// Builder method to restrict letters.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: AlphabetFilter) -> Self {
        self.alphabet = Some(alphabet);
        self
    }
}

impl Filter for NamesFilter {
    fn accepts(&self, name: &Name) -> Result<bool> {
        Ok(self.languages.accepts(name)?
            && self.regex.accepts(name)?
            && self.script.accepts(name)?
            && self.alphabet.accepts(name)?)
    }
}
