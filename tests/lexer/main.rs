//! Integration tests for Layer 1: Lexer
//!
//! Tests for segmenting names, token readings, alternatives and caching.

mod tokens;
