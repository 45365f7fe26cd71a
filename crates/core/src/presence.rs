//! Field presence.
//!
//! The merge engine overwrites a field only when the incoming record carries
//! a meaningful value for it. "Meaningful" is decided here, in one place:
//! an optional field is present when it is `Some` *and* the inner value is
//! itself meaningful. For most types any value is; strings are the special
//! case, where an empty string counts as absent.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A value that may or may not be meaningful on its own.
pub trait Meaningful {
    /// Returns `true` when the value should count as set.
    fn is_meaningful(&self) -> bool {
        true
    }
}

impl Meaningful for String {
    fn is_meaningful(&self) -> bool {
        !self.is_empty()
    }
}

impl Meaningful for Decimal {}
impl Meaningful for DateTime<Utc> {}
impl Meaningful for i64 {}
impl Meaningful for bool {}
impl<T> Meaningful for Vec<T> {}

/// Uniform "is this field set" check over optional fields.
pub trait Presence {
    /// The value held when present.
    type Value;

    /// Borrow the value if it is present.
    fn present(&self) -> Option<&Self::Value>;

    /// Take the value if it is present.
    fn into_present(self) -> Option<Self::Value>;

    /// Returns `true` when the field is present.
    fn is_present(&self) -> bool {
        self.present().is_some()
    }
}

impl<T: Meaningful> Presence for Option<T> {
    type Value = T;

    fn present(&self) -> Option<&T> {
        self.as_ref().filter(|value| value.is_meaningful())
    }

    fn into_present(self) -> Option<T> {
        self.filter(T::is_meaningful)
    }
}

/// Overwrite `target` with the incoming value when it is present.
pub fn overlay<P: Presence>(target: &mut P::Value, incoming: P) {
    if let Some(value) = incoming.into_present() {
        *target = value;
    }
}

/// Overwrite an optional `target` with the incoming value when it is present.
///
/// An absent incoming value never clears `target`.
pub fn overlay_option<P: Presence>(target: &mut Option<P::Value>, incoming: P) {
    if let Some(value) = incoming.into_present() {
        *target = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_absent() {
        assert!(!Some(String::new()).is_present());
        assert!(Some("x".to_owned()).is_present());
        assert!(!None::<String>.is_present());
    }

    #[test]
    fn test_empty_collection_is_present() {
        assert!(Some(Vec::<i64>::new()).is_present());
    }

    #[test]
    fn test_zero_number_is_present() {
        assert!(Some(Decimal::ZERO).is_present());
    }

    #[test]
    fn test_overlay() {
        let mut currency = "USD".to_owned();
        overlay(&mut currency, Some("EUR".to_owned()));
        assert_eq!(currency, "EUR");

        overlay(&mut currency, Some(String::new()));
        assert_eq!(currency, "EUR");

        overlay(&mut currency, None::<String>);
        assert_eq!(currency, "EUR");
    }

    #[test]
    fn test_overlay_option_never_clears() {
        let mut token = Some("cart-1".to_owned());
        overlay_option(&mut token, None::<String>);
        assert_eq!(token.as_deref(), Some("cart-1"));

        overlay_option(&mut token, Some("cart-2".to_owned()));
        assert_eq!(token.as_deref(), Some("cart-2"));
    }
}
