//! Scalar field rules.
//!
//! Each rule takes a value and the label used in error messages. Rules are
//! pure and can be applied in any order.

use std::net::IpAddr;

use chrono::{DateTime, Utc};

use super::{FieldRule, ValidationError};
use crate::types::{CurrencyCode, EmailAddress};

/// Require an optional value to be set, returning it on success.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`] when `value` is `None`.
pub fn required<'a, T>(value: Option<&'a T>, label: &str) -> Result<&'a T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(label))
}

/// Require a string with at least one non-whitespace character.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`] for empty or blank input.
pub fn valued_string(value: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::missing(label));
    }
    Ok(())
}

/// Require a valued string shaped like an email address.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`] for blank input,
/// [`FieldRule::Email`] otherwise.
pub fn email(value: &str, label: &str) -> Result<(), ValidationError> {
    valued_string(value, label)?;
    EmailAddress::parse(value.trim())
        .map(|_| ())
        .map_err(|_| ValidationError::format(label, FieldRule::Email))
}

/// Require a valued string holding an IPv4 or IPv6 literal.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`] for blank input,
/// [`FieldRule::IpAddress`] otherwise.
pub fn ip_address(value: &str, label: &str) -> Result<(), ValidationError> {
    valued_string(value, label)?;
    value
        .trim()
        .parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| ValidationError::format(label, FieldRule::IpAddress))
}

/// Require a valued string of exactly three uppercase letters.
///
/// # Errors
///
/// [`ValidationError::MissingRequiredField`] for blank input,
/// [`FieldRule::CurrencyCode`] otherwise.
pub fn currency_code(value: &str, label: &str) -> Result<(), ValidationError> {
    valued_string(value, label)?;
    CurrencyCode::parse(value.trim())
        .map(|_| ())
        .map_err(|_| ValidationError::format(label, FieldRule::CurrencyCode))
}

/// Require a number `>= 0`. Zero is taken from the type's `Default`.
///
/// # Errors
///
/// [`FieldRule::NonNegative`] for negative values.
pub fn non_negative<T: PartialOrd + Default>(value: T, label: &str) -> Result<(), ValidationError> {
    if value < T::default() {
        return Err(ValidationError::format(label, FieldRule::NonNegative));
    }
    Ok(())
}

/// Require a number `> 0`. Zero is taken from the type's `Default`.
///
/// # Errors
///
/// [`FieldRule::Positive`] for zero or negative values.
pub fn positive<T: PartialOrd + Default>(value: T, label: &str) -> Result<(), ValidationError> {
    if value <= T::default() {
        return Err(ValidationError::format(label, FieldRule::Positive));
    }
    Ok(())
}

/// Require a timestamp other than the Unix epoch sentinel.
///
/// `DateTime::<Utc>::default()` is what a caller gets when a timestamp was
/// never set, so it must not pass as a real value.
///
/// # Errors
///
/// [`FieldRule::DateNotDefault`] when `value` equals the sentinel.
pub fn date_not_default(value: DateTime<Utc>, label: &str) -> Result<(), ValidationError> {
    if value == DateTime::<Utc>::default() {
        return Err(ValidationError::format(label, FieldRule::DateNotDefault));
    }
    Ok(())
}
