//! ISO 4217 style currency codes.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not shaped like an ISO 4217 code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("currency code must be exactly 3 uppercase letters, got {0:?}")]
pub struct CurrencyCodeError(pub String);

/// A three letter currency code such as `USD` or `EUR`.
///
/// Only the format is checked; there is no lookup against the live ISO table,
/// so `XYZ` is accepted while `usd` and `US` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// US dollar, the currency of `total_price_usd`.
    pub const USD: Self = Self(*b"USD");

    /// Parse a `CurrencyCode` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`CurrencyCodeError`] unless the input is exactly three ASCII
    /// uppercase letters.
    pub fn parse(s: &str) -> Result<Self, CurrencyCodeError> {
        match s.as_bytes() {
            &[a, b, c] if [a, b, c].iter().all(u8::is_ascii_uppercase) => Ok(Self([a, b, c])),
            _ => Err(CurrencyCodeError(s.to_owned())),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever constructed from ASCII uppercase bytes.
        core::str::from_utf8(&self.0).unwrap_or("")
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_owned()
    }
}
