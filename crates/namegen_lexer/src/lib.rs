//! Lexer for proper names.
//!
//! The lexer splits a raw name into segments and tags every segment with the
//! token kinds and morphological category assignments it may carry. Segments
//! that can be read more than one way produce several alternative token
//! sequences instead of a single guess.
//!
//! # Modules
//!
//! - [`span`] - Byte ranges into the raw name
//! - [`token`] - Token kinds, [`MorphToken`] and [`TokenSequence`]
//! - [`lexicon`] - Word forms, suffix rules and titles
//! - [`roman`] - Roman numeral recognition
//! - [`config`] - Lexer configuration
//! - [`lexer`] - The [`Lexer`] itself

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod lexer;
pub mod lexicon;
pub mod roman;
pub mod span;
pub mod token;

pub use config::LexerConfig;
pub use lexer::Lexer;
pub use lexicon::{Lexicon, LexiconEntry};
pub use span::Span;
pub use token::{MorphToken, TokenKind, TokenSequence};
