//! Names, languages and name filters.
//!
//! A [`Name`] ties a raw string to a [`Language`]: the language's lexer turns
//! it into token sequences and the grammar of its [`NameType`] decides
//! whether it is a valid name and how it declines.
//!
//! # Modules
//!
//! - [`name_type`] - The name types a language has grammars for
//! - [`language`] - [`Language`]: a lexer plus one grammar per name type
//! - [`guess`] - Guessing a name's type from its shape
//! - [`name`] - The [`Name`] entity
//! - [`filter`] - Predicates selecting names
//! - [`czech`] - Built-in Czech data
//! - [`config`] - Analysis configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod czech;
pub mod filter;
pub mod guess;
pub mod language;
pub mod name;
pub mod name_type;

pub use config::NameConfig;
pub use filter::{
    AllOf, AlphabetFilter, Filter, GrammarFilter, LanguageFilter, NamesFilter, RegexFilter, ScriptFilter,
};
pub use guess::guess_type;
pub use language::Language;
pub use name::{Name, NameAnalysis};
pub use name_type::NameType;
