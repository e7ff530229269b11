//! Declension tables.
//!
//! A declension is an ordered list of ending rules. The first rule whose
//! ending the word has decides the form: it strips a number of characters and
//! appends the case suffix. Text form, one rule per line:
//!
//! ```text
//! # ending strip nom gen dat acc voc loc ins
//! k  0 - a ovi a u ovi em
//! *  0 - a ovi a e ovi em
//! ```
//!
//! `*` matches any word and `-` is an empty suffix.

use namegen_foundation::{Case, Error, ErrorContext, Result};

/// One ending rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndingRule {
    ending: String,
    strip: usize,
    suffixes: [String; 7],
}

impl EndingRule {
    /// Creates a rule for words ending in `ending` (empty matches every word).
    #[must_use]
    pub fn new(ending: &str, strip: usize, suffixes: [&str; 7]) -> Self {
        Self {
            ending: ending.to_lowercase(),
            strip,
            suffixes: suffixes.map(str::to_string),
        }
    }

    // Lowercasing can change the character count ("İ" becomes two), so the
    // strip count is checked against the word as written.
    fn applies_to(&self, word: &str, lower: &str) -> bool {
        lower.ends_with(&self.ending) && word.chars().count() > self.strip
    }

    fn apply(&self, word: &str, case: Case) -> String {
        let keep = word.chars().count().saturating_sub(self.strip);
        let mut form: String = word.chars().take(keep).collect();
        let suffix = &self.suffixes[case_index(case)];
        if is_shouting(word) {
            form.push_str(&suffix.to_uppercase());
        } else {
            form.push_str(suffix);
        }
        form
    }
}

fn case_index(case: Case) -> usize {
    Case::ALL
        .iter()
        .position(|&c| c == case)
        .unwrap_or_default()
}

fn is_shouting(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase())
}

/// A named declension paradigm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declension {
    name: String,
    rules: Vec<EndingRule>,
}

impl Declension {
    /// Creates a declension with no rules.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Parses a declension from text, see the module docs for the format.
    ///
    /// # Errors
    /// Returns `InvalidGrammar` for lines without an ending, a strip count and
    /// seven suffixes.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let mut declension = Self::new(name);
        for (number, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let context = || {
                ErrorContext::new()
                    .with_source(format!("declension {}", declension.name))
                    .with_line(number + 1)
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [ending, strip, suffixes @ ..] = fields.as_slice() else {
                return Err(Error::invalid_grammar("empty declension rule").with_context(context()));
            };
            let Ok(suffixes) = <[&str; 7]>::try_from(suffixes) else {
                return Err(Error::invalid_grammar(format!(
                    "expected 7 case suffixes, found {}",
                    suffixes.len()
                ))
                .with_context(context()));
            };
            let strip: usize = strip.parse().map_err(|_| {
                Error::invalid_grammar(format!("invalid strip count {strip:?}")).with_context(context())
            })?;
            let ending = if *ending == "*" { "" } else { *ending };
            let suffixes = suffixes.map(|s| if s == "-" { "" } else { s });
            declension.rules.push(EndingRule::new(ending, strip, suffixes));
        }
        Ok(declension)
    }

    /// Builder method to append a rule.
    #[must_use]
    pub fn rule(mut self, rule: EndingRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The declension name referenced from productions.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if some rule applies to `word`.
    #[must_use]
    pub fn declines(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.rules.iter().any(|rule| rule.applies_to(word, &lower))
    }

    /// Declines `word` into `case`. Returns `None` if no rule applies.
    #[must_use]
    pub fn decline(&self, word: &str, case: Case) -> Option<String> {
        let lower = word.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.applies_to(word, &lower))
            .map(|rule| rule.apply(word, case))
    }
}
