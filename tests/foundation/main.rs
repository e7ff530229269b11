//! Integration tests for Layer 0: Foundation
//!
//! Tests for the category model, lntrf notation and errors.

mod categories;
mod errors;
mod notation;
