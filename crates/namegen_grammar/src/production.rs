//! Productions: declarative patterns over token sequences.
//!
//! A production is an ordered list of pattern elements. Each element accepts
//! tokens of one kind (or any kind) whose assignment satisfies a category
//! constraint, and may repeat. Productions are data: a new paradigm is a new
//! line of notation, not new matching code.
//!
//! # Notation
//!
//! ```text
//! # id [agree kinds] := elements
//! masculine-animate [gn] := W<k1gM>:pan!
//! given-and-surname [g] := T* W<k1gM>:pan!+ R?
//! ```
//!
//! An element is a token kind code (`W I T R P C A D`, or `*` for any kind),
//! an optional `<lntrf>` constraint, an optional `:declension`, an optional
//! `!` marking it as agreeing, and an optional repetition `?`, `*` or `+`.

use std::fmt;
use std::str::FromStr;

use namegen_foundation::{CategoryAssignment, Error, ErrorContext, MorphCategoryKind, Result};
use namegen_lexer::TokenKind;

/// How many tokens an element consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Repeat {
    /// Exactly one.
    #[default]
    One,
    /// Zero or one (`?`).
    Optional,
    /// Any number (`*`).
    ZeroOrMore,
    /// At least one (`+`).
    OneOrMore,
}

impl Repeat {
    /// Fewest tokens the element consumes.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::One | Self::OneOrMore => 1,
            Self::Optional | Self::ZeroOrMore => 0,
        }
    }

    /// Most tokens the element consumes.
    #[must_use]
    pub const fn max(self) -> usize {
        match self {
            Self::One | Self::Optional => 1,
            Self::ZeroOrMore | Self::OneOrMore => usize::MAX,
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::One => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }
}

/// One position of a production.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternElement {
    /// Accepted token kind, `None` for any.
    pub token: Option<TokenKind>,
    /// Values the chosen assignment must carry.
    pub constraint: CategoryAssignment,
    /// Declension used to inflect matched tokens; indeclinable when `None`.
    pub declension: Option<String>,
    /// Whether matched assignments take part in agreement.
    pub agrees: bool,
    /// Repetition.
    pub repeat: Repeat,
}

impl PatternElement {
    /// An element accepting one token of `kind`.
    #[must_use]
    pub fn token(kind: TokenKind) -> Self {
        Self {
            token: Some(kind),
            constraint: CategoryAssignment::new(),
            declension: None,
            agrees: false,
            repeat: Repeat::One,
        }
    }

    /// An element accepting one word token.
    #[must_use]
    pub fn word() -> Self {
        Self::token(TokenKind::Word)
    }

    /// An element accepting one token of any kind.
    #[must_use]
    pub fn any() -> Self {
        Self {
            token: None,
            ..Self::word()
        }
    }

    /// Builder method to set the category constraint.
    #[must_use]
    pub fn constrained(mut self, constraint: CategoryAssignment) -> Self {
        self.constraint = constraint;
        self
    }

    /// Builder method to set the declension.
    #[must_use]
    pub fn declined(mut self, declension: impl Into<String>) -> Self {
        self.declension = Some(declension.into());
        self
    }

    /// Builder method to mark the element as agreeing.
    #[must_use]
    pub fn agreeing(mut self) -> Self {
        self.agrees = true;
        self
    }

    /// Builder method to set the repetition.
    #[must_use]
    pub fn repeated(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Returns true if a token of `kind` may fill this element.
    #[must_use]
    pub fn accepts_kind(&self, kind: TokenKind) -> bool {
        self.token.is_none_or(|accepted| accepted == kind)
    }
}

impl fmt::Display for PatternElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Some(kind) => write!(f, "{kind}")?,
            None => write!(f, "*")?,
        }
        if !self.constraint.is_empty() {
            write!(f, "<{}>", self.constraint)?;
        }
        if let Some(declension) = &self.declension {
            write!(f, ":{declension}")?;
        }
        if self.agrees {
            write!(f, "!")?;
        }
        write!(f, "{}", self.repeat.symbol())
    }
}

impl FromStr for PatternElement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = |message: &str| Error::malformed_notation(s, message.to_string());

        let mut chars = s.chars();
        let mut element = match chars.next() {
            Some('*') => Self::any(),
            Some(code) => Self::token(TokenKind::from_code(code)?),
            None => return Err(malformed("empty element")),
        };
        let mut rest = chars.as_str();

        if let Some(after) = rest.strip_prefix('<') {
            let close = after.find('>').ok_or_else(|| malformed("unclosed `<`"))?;
            element.constraint = after[..close].parse()?;
            rest = &after[close + 1..];
        }
        if let Some(after) = rest.strip_prefix(':') {
            let len = after
                .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
                .unwrap_or(after.len());
            if len == 0 {
                return Err(malformed("missing declension name after `:`"));
            }
            element.declension = Some(after[..len].to_string());
            rest = &after[len..];
        }
        if let Some(after) = rest.strip_prefix('!') {
            element.agrees = true;
            rest = after;
        }
        element.repeat = match rest {
            "" => Repeat::One,
            "?" => Repeat::Optional,
            "*" => Repeat::ZeroOrMore,
            "+" => Repeat::OneOrMore,
            _ => return Err(malformed("unexpected trailing characters")),
        };
        Ok(element)
    }
}

/// A named declension paradigm pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    /// Identifier reported when this production matches.
    pub id: String,
    /// Kinds agreeing elements must share.
    pub agree: Vec<MorphCategoryKind>,
    /// Elements in order.
    pub elements: Vec<PatternElement>,
}

impl Production {
    /// Creates an empty production.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            agree: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Builder method to set the agreement kinds.
    #[must_use]
    pub fn agree_on(mut self, kinds: impl IntoIterator<Item = MorphCategoryKind>) -> Self {
        self.agree = kinds.into_iter().collect();
        self
    }

    /// Builder method to append an element.
    #[must_use]
    pub fn element(mut self, element: PatternElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Parses every production of a text block, skipping blanks and `#` comments.
    ///
    /// # Errors
    /// Fails on the first malformed line, with the line number in the context.
    pub fn parse_all(text: &str) -> Result<Vec<Self>> {
        let mut productions = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let production = line.parse::<Self>().map_err(|e| {
                e.with_context(ErrorContext::new().with_source("productions").with_line(number + 1))
            })?;
            productions.push(production);
        }
        Ok(productions)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if !self.agree.is_empty() {
            write!(f, " [")?;
            for kind in &self.agree {
                write!(f, "{}", kind.code())?;
            }
            write!(f, "]")?;
        }
        write!(f, " :=")?;
        for element in &self.elements {
            write!(f, " {element}")?;
        }
        Ok(())
    }
}

impl FromStr for Production {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (head, body) = s
            .split_once(":=")
            .ok_or_else(|| Error::malformed_notation(s, "expected `<id> [agree] := elements`"))?;

        let head = head.trim();
        let (id, agree) = match head.split_once('[') {
            Some((id, kinds)) => {
                let kinds = kinds
                    .strip_suffix(']')
                    .ok_or_else(|| Error::malformed_notation(head, "unclosed `[`"))?;
                let agree = kinds
                    .chars()
                    .map(MorphCategoryKind::from_code)
                    .collect::<Result<Vec<_>>>()?;
                (id.trim(), agree)
            }
            None => (head, Vec::new()),
        };
        if id.is_empty() || id.contains(char::is_whitespace) {
            return Err(Error::malformed_notation(head, "production id must be one word"));
        }

        let elements = body
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<PatternElement>>>()?;

        Ok(Self {
            id: id.to_string(),
            agree,
            elements,
        })
    }
}
