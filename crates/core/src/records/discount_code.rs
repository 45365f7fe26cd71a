//! Discount codes applied to an order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::validation::{Strictness, Validate, ValidationError, rules};

/// A discount code and the amount it took off the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCode {
    #[serde(default)]
    pub code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl Validate for DiscountCode {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        rules::valued_string(&self.code, "Code")?;
        rules::non_negative(self.amount, "Amount")
    }
}

static DISCOUNT_CODE_CONTRACT: RecordContract = RecordContract {
    record: "DiscountCode",
    fields: &[
        FieldContract::always("code", "code"),
        FieldContract::always("amount", "amount"),
    ],
};

impl WireContract for DiscountCode {
    fn contract() -> &'static RecordContract {
        &DISCOUNT_CODE_CONTRACT
    }
}
