//! Integration tests for Layer 3: Names
//!
//! Tests for name analysis across grammars, type guessing and filtering.

mod filters;
mod guessing;
mod names;
