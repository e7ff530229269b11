//! Lexical data for the lexer.
//!
//! A lexicon holds known word forms, suffix rules that tag unknown words, and
//! the closed set of titles. Entries can be added one by one or from a text
//! block with one entry per line:
//!
//! ```text
//! # kind form lntrf...
//! W jan k1gMnSc1
//! P z k7
//! T Ing.
//! S ová k2gFnSc1
//! ```
//!
//! `S` lines are suffix rules, `T` lines are titles and every other code is a
//! [`TokenKind`] code.

use std::collections::{HashMap, HashSet};

use namegen_foundation::{CategoryAssignment, Error, ErrorContext, Result};

use crate::token::TokenKind;

/// The readings of one word form under one token kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Token kind of this reading.
    pub kind: TokenKind,
    /// Candidate assignments, in the order they were added.
    pub assignments: Vec<CategoryAssignment>,
}

#[derive(Clone, Debug)]
struct SuffixRule {
    suffix: String,
    assignments: Vec<CategoryAssignment>,
}

/// Word forms, suffix rules and titles.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// Lowercase form -> readings, one entry per token kind
    words: HashMap<String, Vec<LexiconEntry>>,
    /// Suffix rules in declaration order
    suffixes: Vec<SuffixRule>,
    /// Lowercase titles including the trailing dot
    titles: HashSet<String>,
}

impl Lexicon {
    /// Creates a new empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a lexicon from text.
    ///
    /// # Errors
    /// Fails on unknown codes or malformed lntrf, with the line in the context.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lexicon = Self::new();
        lexicon.extend_from_str(text)?;
        Ok(lexicon)
    }

    /// Adds entries from text, see the module docs for the format.
    ///
    /// # Errors
    /// Fails on unknown codes or malformed lntrf, with the line in the context.
    pub fn extend_from_str(&mut self, text: &str) -> Result<()> {
        for (number, line) in text.lines().enumerate() {
            self.parse_line(line).map_err(|e| {
                e.with_context(ErrorContext::new().with_source("lexicon").with_line(number + 1))
            })?;
        }
        Ok(())
    }

    fn parse_line(&mut self, line: &str) -> Result<()> {
        let line = line.split('#').next().unwrap_or_default().trim();
        let mut fields = line.split_whitespace();
        let (Some(code), Some(form)) = (fields.next(), fields.next()) else {
            if line.is_empty() {
                return Ok(());
            }
            return Err(Error::malformed_notation(line, "expected `<kind> <form> [lntrf...]`"));
        };
        let assignments = fields
            .map(str::parse)
            .collect::<Result<Vec<CategoryAssignment>>>()?;

        match code {
            "T" => {
                self.add_title(form);
                Ok(())
            }
            "S" => {
                self.add_suffix(form, assignments);
                Ok(())
            }
            _ => {
                let mut chars = code.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        self.add_word(form, TokenKind::from_code(c)?, assignments);
                        Ok(())
                    }
                    _ => Err(Error::malformed_notation(code, "unknown lexicon entry code")),
                }
            }
        }
    }

    /// Adds readings of a word form. Readings of the same kind are merged.
    pub fn add_word(&mut self, form: &str, kind: TokenKind, assignments: Vec<CategoryAssignment>) {
        let entries = self.words.entry(form.to_lowercase()).or_default();
        match entries.iter_mut().find(|entry| entry.kind == kind) {
            Some(entry) => {
                for assignment in assignments {
                    if !entry.assignments.contains(&assignment) {
                        entry.assignments.push(assignment);
                    }
                }
            }
            None => entries.push(LexiconEntry { kind, assignments }),
        }
    }

    /// Adds a suffix rule for words the lexicon does not list.
    pub fn add_suffix(&mut self, suffix: &str, assignments: Vec<CategoryAssignment>) {
        self.suffixes.push(SuffixRule {
            suffix: suffix.to_lowercase(),
            assignments,
        });
    }

    /// Adds a title such as "Ing.".
    pub fn add_title(&mut self, title: &str) {
        self.titles.insert(title.to_lowercase());
    }

    /// Readings of a word form (case-insensitive), in insertion order.
    #[must_use]
    pub fn lookup(&self, form: &str) -> &[LexiconEntry] {
        match self.words.get(&form.to_lowercase()) {
            Some(entries) => entries,
            None => &[],
        }
    }

    /// Returns true if `form` (with its dot) is a known title.
    #[must_use]
    pub fn is_title(&self, form: &str) -> bool {
        self.titles.contains(&form.to_lowercase())
    }

    /// Assignments of every suffix rule matching `word`.
    ///
    /// Longer suffixes come first; rules of equal length keep declaration
    /// order. Repeated assignments are dropped.
    #[must_use]
    pub fn suffix_assignments(&self, word: &str) -> Vec<CategoryAssignment> {
        let lower = word.to_lowercase();
        let mut rules: Vec<&SuffixRule> = self
            .suffixes
            .iter()
            .filter(|rule| lower.ends_with(&rule.suffix) && lower.len() > rule.suffix.len())
            .collect();
        rules.sort_by(|a, b| b.suffix.chars().count().cmp(&a.suffix.chars().count()));

        let mut assignments = Vec::new();
        for assignment in rules.into_iter().flat_map(|rule| rule.assignments.iter()) {
            if !assignments.contains(assignment) {
                assignments.push(*assignment);
            }
        }
        assignments
    }

    /// Number of distinct word forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no word forms, suffix rules or titles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.suffixes.is_empty() && self.titles.is_empty()
    }
}
