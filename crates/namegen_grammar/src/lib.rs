//! Grammars for proper names.
//!
//! A [`Grammar`] decides whether a name belongs to the language of one name
//! type. It holds ordered [`Production`]s and the [`Declension`]s they refer
//! to; analysis picks the first production, in priority order, that matches
//! one of the lexer's alternative token sequences.
//!
//! # Modules
//!
//! - [`production`] - Pattern elements, productions and their notation
//! - [`declension`] - Ending rules used to inflect matched words
//! - [`grammar`] - [`Grammar`], analysis and inflection

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod declension;
pub mod grammar;
pub mod production;

pub use declension::{Declension, EndingRule};
pub use grammar::{Analysis, Grammar, GrammarBuilder, ParseResult, TokenMatch};
pub use production::{PatternElement, Production, Repeat};
