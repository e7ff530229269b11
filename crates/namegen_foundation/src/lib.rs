//! Core types for namegen.
//!
//! This crate provides:
//! - [`MorphCategoryKind`] and [`MorphCategoryValue`] - The closed category model
//! - [`CategoryAssignment`] - At most one value per category kind, with lntrf notation
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assignment;
mod category;
mod error;

pub use assignment::CategoryAssignment;
pub use category::{
    Case, DegreeOfComparison, Gender, MorphCategoryKind, MorphCategoryValue, Negation, Number,
    PartOfSpeech, Person,
};
pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using the namegen error type.
pub type Result<T> = std::result::Result<T, Error>;
