//! Shipping methods charged on an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::validation::{Strictness, Validate, ValidationError, rules};

/// A shipping method and its price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingLine {
    #[serde(default)]
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Carrier service code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Validate for ShippingLine {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        rules::valued_string(&self.title, "Title")?;
        rules::non_negative(self.price, "Price")
    }
}

static SHIPPING_LINE_CONTRACT: RecordContract = RecordContract {
    record: "ShippingLine",
    fields: &[
        FieldContract::always("title", "title"),
        FieldContract::always("price", "price"),
        FieldContract::omittable("code", "code"),
    ],
};

impl WireContract for ShippingLine {
    fn contract() -> &'static RecordContract {
        &SHIPPING_LINE_CONTRACT
    }
}
