//! Order lifecycle variants.
//!
//! Every event sent to the review service is one of a closed set of record
//! shapes sharing the merchant order identity. [`OrderVariant`] is the single
//! dispatch point for validating and describing any of them.

mod batch;
mod chargeback;
mod checkout;
mod create;
mod fulfillment;

use core::fmt;

use serde::{Deserializer, Serialize};

pub use batch::OrderBatch;
pub use chargeback::OrderChargeback;
pub use checkout::OrderCheckoutUpdate;
pub use create::OrderCreate;
pub use fulfillment::OrderFulfillment;

use crate::contract::{RecordContract, WireContract};
use crate::types::OrderIdentity;
use crate::validation::{Strictness, Validate, ValidationError};

/// Label used for the identity in validation errors.
pub const MERCHANT_ORDER_ID: &str = "Merchant Order ID";

/// The identity must validate before any variant-specific field.
pub(crate) fn validate_identity(id: &OrderIdentity) -> Result<(), ValidationError> {
    if id.is_valued() {
        Ok(())
    } else {
        Err(ValidationError::missing(MERCHANT_ORDER_ID))
    }
}

/// Which lifecycle event a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Create,
    Checkout,
    Fulfillment,
    Chargeback,
}

impl RecordKind {
    /// All kinds, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Create,
        Self::Checkout,
        Self::Fulfillment,
        Self::Chargeback,
    ];

    /// Wire table of the record type for this kind.
    #[must_use]
    pub fn contract(self) -> &'static RecordContract {
        match self {
            Self::Create => OrderCreate::contract(),
            Self::Checkout => OrderCheckoutUpdate::contract(),
            Self::Fulfillment => OrderFulfillment::contract(),
            Self::Chargeback => OrderChargeback::contract(),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("create"),
            Self::Checkout => f.write_str("checkout"),
            Self::Fulfillment => f.write_str("fulfillment"),
            Self::Chargeback => f.write_str("chargeback"),
        }
    }
}

/// Error returned when parsing an unknown record kind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid record kind: {0} (expected create, checkout, fulfillment or chargeback)")]
pub struct RecordKindParseError(pub String);

impl std::str::FromStr for RecordKind {
    type Err = RecordKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" | "order" => Ok(Self::Create),
            "checkout" => Ok(Self::Checkout),
            "fulfillment" | "fulfill" => Ok(Self::Fulfillment),
            "chargeback" => Ok(Self::Chargeback),
            _ => Err(RecordKindParseError(s.to_owned())),
        }
    }
}

/// Any order lifecycle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OrderVariant {
    Create(OrderCreate),
    Checkout(OrderCheckoutUpdate),
    Fulfillment(OrderFulfillment),
    Chargeback(OrderChargeback),
}

impl OrderVariant {
    /// Deserialize a record of the given kind from any serde format.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the input does not match the
    /// record shape for `kind`.
    pub fn deserialize<'de, D>(kind: RecordKind, deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::Deserialize as _;

        match kind {
            RecordKind::Create => OrderCreate::deserialize(deserializer).map(Self::Create),
            RecordKind::Checkout => {
                OrderCheckoutUpdate::deserialize(deserializer).map(Self::Checkout)
            }
            RecordKind::Fulfillment => {
                OrderFulfillment::deserialize(deserializer).map(Self::Fulfillment)
            }
            RecordKind::Chargeback => {
                OrderChargeback::deserialize(deserializer).map(Self::Chargeback)
            }
        }
    }

    /// The lifecycle event this record describes.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Create(_) => RecordKind::Create,
            Self::Checkout(_) => RecordKind::Checkout,
            Self::Fulfillment(_) => RecordKind::Fulfillment,
            Self::Chargeback(_) => RecordKind::Chargeback,
        }
    }

    /// The merchant order identity shared by every variant.
    #[must_use]
    pub const fn identity(&self) -> &OrderIdentity {
        match self {
            Self::Create(order) => &order.id,
            Self::Checkout(checkout) => &checkout.id,
            Self::Fulfillment(fulfillment) => &fulfillment.id,
            Self::Chargeback(chargeback) => &chargeback.id,
        }
    }

    /// Wire table of this record's type.
    #[must_use]
    pub fn contract(&self) -> &'static RecordContract {
        self.kind().contract()
    }
}

impl Validate for OrderVariant {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        match self {
            Self::Create(order) => order.validate(strictness),
            Self::Checkout(checkout) => checkout.validate(strictness),
            Self::Fulfillment(fulfillment) => fulfillment.validate(strictness),
            Self::Chargeback(chargeback) => chargeback.validate(strictness),
        }
    }
}

impl From<OrderCreate> for OrderVariant {
    fn from(order: OrderCreate) -> Self {
        Self::Create(order)
    }
}

impl From<OrderCheckoutUpdate> for OrderVariant {
    fn from(checkout: OrderCheckoutUpdate) -> Self {
        Self::Checkout(checkout)
    }
}

impl From<OrderFulfillment> for OrderVariant {
    fn from(fulfillment: OrderFulfillment) -> Self {
        Self::Fulfillment(fulfillment)
    }
}

impl From<OrderChargeback> for OrderVariant {
    fn from(chargeback: OrderChargeback) -> Self {
        Self::Chargeback(chargeback)
    }
}
