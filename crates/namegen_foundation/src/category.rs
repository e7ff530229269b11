//! Morphological categories and their compact lntrf codes.
//!
//! Every category kind owns a single-letter code and every value owns a code
//! scoped to its kind. The code tables are fixed; [`MorphCategoryValue::decode`]
//! goes through a table that is checked for duplicate codes when first built.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::Error;
use crate::Result;

/// Kind of a morphological category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MorphCategoryKind {
    /// Part of speech (`k`).
    PartOfSpeech,
    /// Gender (`g`).
    Gender,
    /// Number (`n`).
    Number,
    /// Case (`c`).
    Case,
    /// Negation (`e`).
    Negation,
    /// Degree of comparison (`d`).
    DegreeOfComparison,
    /// Person (`p`).
    Person,
}

impl MorphCategoryKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::PartOfSpeech,
        Self::Gender,
        Self::Number,
        Self::Case,
        Self::Negation,
        Self::DegreeOfComparison,
        Self::Person,
    ];

    /// Returns the lntrf code of this kind.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::PartOfSpeech => 'k',
            Self::Gender => 'g',
            Self::Number => 'n',
            Self::Case => 'c',
            Self::Negation => 'e',
            Self::DegreeOfComparison => 'd',
            Self::Person => 'p',
        }
    }

    /// Decodes a kind from its lntrf code.
    ///
    /// # Errors
    /// Returns `InvalidCategoryKind` when no kind uses the code.
    pub fn from_code(code: char) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::invalid_category_kind(code.to_string()))
    }

    /// Position of this kind in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PartOfSpeech => "part of speech",
            Self::Gender => "gender",
            Self::Number => "number",
            Self::Case => "case",
            Self::Negation => "negation",
            Self::DegreeOfComparison => "degree of comparison",
            Self::Person => "person",
        }
    }

    /// Every value of this kind, in declaration order.
    #[must_use]
    pub fn values(self) -> Vec<MorphCategoryValue> {
        match self {
            Self::PartOfSpeech => PartOfSpeech::ALL.iter().map(|&v| v.into()).collect(),
            Self::Gender => Gender::ALL.iter().map(|&v| v.into()).collect(),
            Self::Number => Number::ALL.iter().map(|&v| v.into()).collect(),
            Self::Case => Case::ALL.iter().map(|&v| v.into()).collect(),
            Self::Negation => Negation::ALL.iter().map(|&v| v.into()).collect(),
            Self::DegreeOfComparison => DegreeOfComparison::ALL.iter().map(|&v| v.into()).collect(),
            Self::Person => Person::ALL.iter().map(|&v| v.into()).collect(),
        }
    }
}

impl fmt::Display for MorphCategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

macro_rules! category_values {
    (
        $(#[$meta:meta])*
        $kind:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $kind {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $kind {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The category kind these values belong to.
            pub const KIND: MorphCategoryKind = MorphCategoryKind::$kind;

            /// Returns the value code, scoped to [`Self::KIND`].
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            /// Decodes a value code of this kind.
            ///
            /// # Errors
            /// Returns `InvalidCategoryValue` when the code is not registered.
            pub fn from_code(code: &str) -> Result<Self> {
                match MorphCategoryValue::decode(Self::KIND, code)? {
                    MorphCategoryValue::$kind(value) => Ok(value),
                    _ => Err(Error::invalid_category_value(Self::KIND, code)),
                }
            }
        }

        impl From<$kind> for MorphCategoryValue {
            fn from(value: $kind) -> Self {
                MorphCategoryValue::$kind(value)
            }
        }
    };
}

category_values! {
    /// Part of speech.
    PartOfSpeech {
        /// Noun.
        Noun = "1",
        /// Adjective.
        Adjective = "2",
        /// Pronoun.
        Pronoun = "3",
        /// Numeral.
        Numeral = "4",
        /// Verb.
        Verb = "5",
        /// Adverb.
        Adverb = "6",
        /// Preposition.
        Preposition = "7",
        /// Conjunction.
        Conjunction = "8",
        /// Particle.
        Particle = "9",
        /// Interjection.
        Interjection = "10",
    }
}

category_values! {
    /// Grammatical gender.
    Gender {
        /// Masculine animate.
        MasculineAnimate = "M",
        /// Masculine inanimate.
        MasculineInanimate = "I",
        /// Neuter.
        Neuter = "N",
        /// Feminine.
        Feminine = "F",
        /// Family name gender.
        Family = "R",
    }
}

category_values! {
    /// Grammatical number.
    Number {
        /// Singular.
        Singular = "S",
        /// Plural.
        Plural = "P",
        /// Dual.
        Dual = "D",
        /// Members of a family taken together ("Novákovi").
        Family = "R",
    }
}

category_values! {
    /// The seven Czech cases.
    Case {
        /// 1st case (kdo, co).
        Nominative = "1",
        /// 2nd case (koho, čeho).
        Genitive = "2",
        /// 3rd case (komu, čemu).
        Dative = "3",
        /// 4th case (koho, co).
        Accusative = "4",
        /// 5th case, addressing.
        Vocative = "5",
        /// 6th case (o kom, o čem).
        Locative = "6",
        /// 7th case (kým, čím).
        Instrumental = "7",
    }
}

category_values! {
    /// Negation.
    Negation {
        /// Affirmative.
        Affirmative = "A",
        /// Negated.
        Negated = "N",
    }
}

category_values! {
    /// Degree of comparison.
    DegreeOfComparison {
        /// Positive (velký).
        Positive = "1",
        /// Comparative (větší).
        Comparative = "2",
        /// Superlative (největší).
        Superlative = "3",
    }
}

category_values! {
    /// Grammatical person.
    Person {
        /// First person.
        First = "1",
        /// Second person.
        Second = "2",
        /// Third person.
        Third = "3",
        /// Any of the three.
        Any = "X",
    }
}

/// A value of some morphological category kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MorphCategoryValue {
    /// Part of speech value.
    PartOfSpeech(PartOfSpeech),
    /// Gender value.
    Gender(Gender),
    /// Number value.
    Number(Number),
    /// Case value.
    Case(Case),
    /// Negation value.
    Negation(Negation),
    /// Degree of comparison value.
    DegreeOfComparison(DegreeOfComparison),
    /// Person value.
    Person(Person),
}

/// Decoding table keyed by (kind, value code).
///
/// Built once; a duplicate code within one kind is a defect in the tables
/// above and aborts construction.
static DECODE_TABLE: LazyLock<HashMap<(MorphCategoryKind, &'static str), MorphCategoryValue>> =
    LazyLock::new(|| {
        let mut table = HashMap::new();
        for kind in MorphCategoryKind::ALL {
            for value in kind.values() {
                let previous = table.insert((kind, value.code()), value);
                assert!(
                    previous.is_none(),
                    "duplicate lntrf code {:?} for {kind}",
                    value.code()
                );
            }
        }
        table
    });

impl MorphCategoryValue {
    /// Returns the kind this value belongs to.
    #[must_use]
    pub const fn kind(self) -> MorphCategoryKind {
        match self {
            Self::PartOfSpeech(_) => MorphCategoryKind::PartOfSpeech,
            Self::Gender(_) => MorphCategoryKind::Gender,
            Self::Number(_) => MorphCategoryKind::Number,
            Self::Case(_) => MorphCategoryKind::Case,
            Self::Negation(_) => MorphCategoryKind::Negation,
            Self::DegreeOfComparison(_) => MorphCategoryKind::DegreeOfComparison,
            Self::Person(_) => MorphCategoryKind::Person,
        }
    }

    /// Returns the value code, without the kind code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::PartOfSpeech(v) => v.code(),
            Self::Gender(v) => v.code(),
            Self::Number(v) => v.code(),
            Self::Case(v) => v.code(),
            Self::Negation(v) => v.code(),
            Self::DegreeOfComparison(v) => v.code(),
            Self::Person(v) => v.code(),
        }
    }

    /// Decodes a value code scoped to `kind`.
    ///
    /// # Errors
    /// Returns `InvalidCategoryValue` when the code is not registered for `kind`.
    pub fn decode(kind: MorphCategoryKind, code: &str) -> Result<Self> {
        DECODE_TABLE
            .get(&(kind, code))
            .copied()
            .ok_or_else(|| Error::invalid_category_value(kind, code))
    }

    /// Returns the kind code followed by the value code, e.g. `c1`.
    #[must_use]
    pub fn lntrf(self) -> String {
        format!("{}{}", self.kind().code(), self.code())
    }
}

impl fmt::Display for MorphCategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind().code(), self.code())
    }
}

impl FromStr for MorphCategoryValue {
    type Err = Error;

    /// Parses a single pair such as `c1` or `k10`.
    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let Some(kind_code) = chars.next() else {
            return Err(Error::malformed_notation(s, "empty category pair"));
        };
        let kind = MorphCategoryKind::from_code(kind_code)?;
        Self::decode(kind, chars.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MorphCategoryValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MorphCategoryValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
