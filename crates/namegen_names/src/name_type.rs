//! Name types.

use std::fmt;
use std::str::FromStr;

use namegen_foundation::{Error, Result};

/// What kind of entity a name denotes. Each type has its own grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameType {
    /// Given name(s) and surname of a man.
    MalePerson,
    /// Given name(s) and surname of a woman.
    FemalePerson,
    /// A surname on its own.
    Surname,
    /// A town, village or other place.
    Location,
    /// A sports team or club.
    Team,
}

impl NameType {
    /// Every name type, in the order an unbound name tries them.
    pub const ALL: [Self; 5] = [
        Self::MalePerson,
        Self::FemalePerson,
        Self::Surname,
        Self::Location,
        Self::Team,
    ];

    /// Single letter code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::MalePerson => 'M',
            Self::FemalePerson => 'F',
            Self::Surname => 'S',
            Self::Location => 'L',
            Self::Team => 'T',
        }
    }

    /// Parses a single letter code.
    ///
    /// # Errors
    /// Returns `UnknownNameType` for anything else.
    pub fn from_code(code: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name_type| {
                let mut chars = code.chars();
                chars.next() == Some(name_type.code()) && chars.next().is_none()
            })
            .ok_or_else(|| Error::unknown_name_type(code))
    }

    /// Human-readable name, also used as the grammar name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MalePerson => "male person",
            Self::FemalePerson => "female person",
            Self::Surname => "surname",
            Self::Location => "location",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for NameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NameType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
