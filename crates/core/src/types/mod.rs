//! Value types shared by every order record.
//!
//! These wrap the scalar concepts whose format the review service cares
//! about: the merchant order identity, email addresses, currency codes and the
//! enumerated status values carried on line items and fulfillments.

pub mod currency;
pub mod email;
pub mod identity;
pub mod status;

pub use currency::{CurrencyCode, CurrencyCodeError};
pub use email::{EmailAddress, EmailError};
pub use identity::OrderIdentity;
pub use status::*;
