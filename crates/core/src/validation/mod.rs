//! The validatable capability shared by every order record.
//!
//! A record validates its own scalar fields with the [`rules`] and then each
//! owned sub-record in declaration order, stopping at the first failure.
//! Sub-record failures are wrapped in [`ValidationError::Nested`] so the
//! caller can tell which sub-record (and which element of a collection)
//! was at fault.

mod error;
pub mod rules;

use core::fmt;

use serde::{Deserialize, Serialize};

pub use error::{FieldRule, ValidationError};

/// How many of the "recommended" invariants are enforced.
///
/// `Strict` turns recommended fields (both addresses, customer names, card
/// verification codes, ...) into mandatory ones. `Weak` accepts a record that
/// has just enough for the review service to score it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    #[default]
    Weak,
    Strict,
}

impl Strictness {
    /// Returns `true` for [`Strictness::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => f.write_str("weak"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Error returned when parsing an unknown strictness name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid strictness: {0} (expected `weak` or `strict`)")]
pub struct StrictnessParseError(pub String);

impl std::str::FromStr for Strictness {
    type Err = StrictnessParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "strict" => Ok(Self::Strict),
            _ => Err(StrictnessParseError(s.to_owned())),
        }
    }
}

/// A record that can check itself before being encoded.
///
/// Validation never mutates the record.
pub trait Validate {
    /// Validate the record under the given strictness.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError>;
}

/// Validate a sub-record, labelling any failure with `label`.
///
/// # Errors
///
/// The sub-record's failure wrapped in [`ValidationError::Nested`].
pub fn nested<T: Validate + ?Sized>(
    label: &str,
    record: &T,
    strictness: Strictness,
) -> Result<(), ValidationError> {
    record
        .validate(strictness)
        .map_err(|err| ValidationError::nested(label, err))
}

/// Require a sub-record to be present, then validate it.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`] when absent, otherwise as
/// [`nested`].
pub fn required_nested<T: Validate>(
    label: &str,
    record: Option<&T>,
    strictness: Strictness,
) -> Result<(), ValidationError> {
    nested(label, rules::required(record, label)?, strictness)
}

/// Validate every element of a collection in order.
///
/// Elements are labelled `"{label}[{index}]"`. An empty collection is valid.
///
/// # Errors
///
/// The first failing element, wrapped in [`ValidationError::Nested`].
pub fn each<T: Validate>(
    label: &str,
    records: &[T],
    strictness: Strictness,
) -> Result<(), ValidationError> {
    records
        .iter()
        .enumerate()
        .try_for_each(|(index, record)| nested(&format!("{label}[{index}]"), record, strictness))
}
