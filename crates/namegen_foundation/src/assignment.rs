//! Category assignments: at most one value per category kind.
//!
//! The lntrf form of an assignment is a delimiter-free concatenation of
//! `<kind-code><value-code>` pairs, e.g. `k1gMnSc1`. Kind codes are lowercase
//! letters and value codes are digits or uppercase letters, so the pairs can be
//! split without a separator.

use std::fmt;
use std::str::FromStr;

use crate::category::{
    Case, Gender, MorphCategoryKind, MorphCategoryValue, Number, PartOfSpeech,
};
use crate::error::Error;
use crate::Result;

/// A mapping from category kind to value, at most one value per kind.
///
/// Equality does not depend on the order in which values were added.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryAssignment {
    slots: [Option<MorphCategoryValue>; MorphCategoryKind::ALL.len()],
}

impl CategoryAssignment {
    /// Creates an assignment with no values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; MorphCategoryKind::ALL.len()],
        }
    }

    /// Builds an assignment from values, rejecting repeated kinds.
    ///
    /// # Errors
    /// Returns `DuplicateCategoryKind` if two values share a kind.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = MorphCategoryValue>,
    {
        let mut assignment = Self::new();
        for value in values {
            if assignment.insert(value).is_some() {
                return Err(Error::duplicate_category_kind(value.kind()));
            }
        }
        Ok(assignment)
    }

    /// Returns a copy with `value` set, replacing any value of the same kind.
    #[must_use]
    pub fn with(mut self, value: impl Into<MorphCategoryValue>) -> Self {
        self.insert(value.into());
        self
    }

    /// Sets a value and returns the previous value of that kind.
    pub fn insert(&mut self, value: MorphCategoryValue) -> Option<MorphCategoryValue> {
        self.slots[value.kind().index()].replace(value)
    }

    /// Removes the value of `kind`.
    pub fn remove(&mut self, kind: MorphCategoryKind) -> Option<MorphCategoryValue> {
        self.slots[kind.index()].take()
    }

    /// Returns the value of `kind`, if assigned.
    #[must_use]
    pub fn get(&self, kind: MorphCategoryKind) -> Option<MorphCategoryValue> {
        self.slots[kind.index()]
    }

    /// Returns true if no kind is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of assigned kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Iterates assigned values in kind order.
    pub fn iter(&self) -> impl Iterator<Item = MorphCategoryValue> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Returns true if every value of `constraint` is also assigned here.
    #[must_use]
    pub fn satisfies(&self, constraint: &Self) -> bool {
        constraint.iter().all(|value| self.get(value.kind()) == Some(value))
    }

    /// Keeps only the given kinds.
    #[must_use]
    pub fn restrict(&self, kinds: &[MorphCategoryKind]) -> Self {
        let mut restricted = Self::new();
        for &kind in kinds {
            restricted.slots[kind.index()] = self.slots[kind.index()];
        }
        restricted
    }

    /// Merges `other` into this assignment.
    ///
    /// Returns `None` when both assign different values to the same kind.
    #[must_use]
    pub fn unify(&self, other: &Self) -> Option<Self> {
        let mut merged = *self;
        for value in other.iter() {
            match merged.get(value.kind()) {
                Some(existing) if existing != value => return None,
                _ => {
                    merged.insert(value);
                }
            }
        }
        Some(merged)
    }

    /// Part of speech, if assigned.
    #[must_use]
    pub fn part_of_speech(&self) -> Option<PartOfSpeech> {
        match self.get(MorphCategoryKind::PartOfSpeech) {
            Some(MorphCategoryValue::PartOfSpeech(v)) => Some(v),
            _ => None,
        }
    }

    /// Gender, if assigned.
    #[must_use]
    pub fn gender(&self) -> Option<Gender> {
        match self.get(MorphCategoryKind::Gender) {
            Some(MorphCategoryValue::Gender(v)) => Some(v),
            _ => None,
        }
    }

    /// Number, if assigned.
    #[must_use]
    pub fn number(&self) -> Option<Number> {
        match self.get(MorphCategoryKind::Number) {
            Some(MorphCategoryValue::Number(v)) => Some(v),
            _ => None,
        }
    }

    /// Case, if assigned.
    #[must_use]
    pub fn case(&self) -> Option<Case> {
        match self.get(MorphCategoryKind::Case) {
            Some(MorphCategoryValue::Case(v)) => Some(v),
            _ => None,
        }
    }

    /// Returns the lntrf form, pairs in kind order.
    #[must_use]
    pub fn lntrf(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CategoryAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CategoryAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryAssignment({self})")
    }
}

impl FromStr for CategoryAssignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut assignment = Self::new();
        let mut rest = s;
        while let Some(kind_code) = rest.chars().next() {
            let kind = MorphCategoryKind::from_code(kind_code)?;
            rest = &rest[kind_code.len_utf8()..];
            let code_len = rest
                .find(|c: char| !(c.is_ascii_digit() || c.is_ascii_uppercase()))
                .unwrap_or(rest.len());
            if code_len == 0 {
                return Err(Error::malformed_notation(
                    s,
                    format!("missing value code after {kind_code:?}"),
                ));
            }
            let value = MorphCategoryValue::decode(kind, &rest[..code_len])?;
            if assignment.insert(value).is_some() {
                return Err(Error::duplicate_category_kind(kind));
            }
            rest = &rest[code_len..];
        }
        Ok(assignment)
    }
}

impl FromIterator<MorphCategoryValue> for CategoryAssignment {
    /// Collects values; a later value replaces an earlier one of the same kind.
    fn from_iter<I: IntoIterator<Item = MorphCategoryValue>>(iter: I) -> Self {
        let mut assignment = Self::new();
        for value in iter {
            assignment.insert(value);
        }
        assignment
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CategoryAssignment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CategoryAssignment {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
