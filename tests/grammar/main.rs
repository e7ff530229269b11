//! Integration tests for Layer 2: Grammar
//!
//! Tests for production notation, analysis order, agreement and inflection.

mod notation;
