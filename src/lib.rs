//! Namegen - morphological analysis and declension of Czech proper names
//!
//! This crate re-exports all layers of the namegen system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: namegen_names       Name entity, name types, Czech data, filters
//! Layer 2: namegen_grammar     Productions, declensions, analysis
//! Layer 1: namegen_lexer       Lexicon, token kinds, alternative token sequences
//! Layer 0: namegen_foundation  Errors, morphological categories, lntrf notation
//! ```

pub use namegen_foundation as foundation;
pub use namegen_grammar as grammar;
pub use namegen_lexer as lexer;
pub use namegen_names as names;
