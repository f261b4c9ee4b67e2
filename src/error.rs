//! Error types for semverix.
//!
//! This module provides the single error enum returned by every fallible
//! constructor in the crate, following the error kinds named in the core
//! design: parse failures, numeric overflow / length caps, invalid
//! arguments to `inc`, and comparator/range type mismatches.

use std::fmt;

use thiserror::Error;

/// Which field of a version a numeric cap or format error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartType {
    Major,
    Minor,
    Patch,
    /// A numeric pre-release identifier, e.g. the `4` in `1.2.3-4`.
    Prerelease,
}

impl fmt::Display for PartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartType::Major => write!(f, "major version number"),
            PartType::Minor => write!(f, "minor version number"),
            PartType::Patch => write!(f, "patch version number"),
            PartType::Prerelease => write!(f, "pre-release identifier"),
        }
    }
}

/// Errors produced while parsing or manipulating versions, comparators,
/// and ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input did not match the version or range grammar.
    #[error("invalid semantic version: {0:?}")]
    ParseFailure(String),

    /// A numeric field, or a numeric pre-release identifier, overflowed
    /// the safe-integer cap.
    #[error("{part} exceeds the maximum safe value")]
    NumericOverflow { part: PartType },

    /// The input string was longer than the 256-character cap.
    #[error("version is longer than {max} characters")]
    InputTooLong { max: usize },

    /// An `inc` call requested a release kind or identifier combination
    /// that does not make sense for the current version.
    #[error("invalid increment: {0}")]
    InvalidArgument(String),

    /// An operation expecting a `Comparator` was given a `Range`, or
    /// vice versa.
    #[error("expected a {expected}, found a {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
