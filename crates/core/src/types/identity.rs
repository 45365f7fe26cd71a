//! Merchant-assigned order identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The identifier a merchant assigns to an order.
///
/// The review service accepts either a number or a string, and the same value
/// must be sent for every lifecycle event of one order. Serialized untagged so
/// the wire `id` is a bare JSON number or string.
///
/// # Example
///
/// ```rust
/// # use orderguard_core::OrderIdentity;
/// let numeric = OrderIdentity::from(1001);
/// let text = OrderIdentity::from("ord-1001");
///
/// assert_eq!(numeric.to_string(), "1001");
/// assert_eq!(text.to_string(), "ord-1001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderIdentity {
    /// Integer identifier.
    Numeric(i64),
    /// Free-form identifier; must be non-blank to validate.
    Text(String),
}

impl OrderIdentity {
    /// Returns `true` when the identity carries a usable value.
    ///
    /// Numeric identities always do; text identities need at least one
    /// non-whitespace character.
    #[must_use]
    pub fn is_valued(&self) -> bool {
        match self {
            Self::Numeric(_) => true,
            Self::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl Default for OrderIdentity {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for OrderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for OrderIdentity {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<i32> for OrderIdentity {
    fn from(id: i32) -> Self {
        Self::Numeric(i64::from(id))
    }
}

impl From<String> for OrderIdentity {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for OrderIdentity {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}
