//! Customer placing the order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::presence::Meaningful;
use crate::validation::{Strictness, Validate, ValidationError, rules};

/// The merchant's customer record.
///
/// Names are only mandatory under [`Strictness::Strict`]; the remaining
/// fields are checked when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID at the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the merchant verified the email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
    /// When the customer account was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Number of previous orders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orders_count: Option<i64>,
    /// Lifetime spend at the merchant.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_spent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_id: Option<String>,
    /// Free-form note attached by the merchant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Validate for Customer {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        if strictness.is_strict() {
            rules::valued_string(&self.first_name, "First Name")?;
            rules::valued_string(&self.last_name, "Last Name")?;
        }
        if let Some(email) = &self.email {
            rules::email(email, "Email")?;
        }
        if let Some(created_at) = self.created_at {
            rules::date_not_default(created_at, "Created At")?;
        }
        if let Some(orders_count) = self.orders_count {
            rules::non_negative(orders_count, "Orders Count")?;
        }
        if let Some(total_spent) = self.total_spent {
            rules::non_negative(total_spent, "Total Spent")?;
        }
        Ok(())
    }
}

impl Meaningful for Customer {}

static CUSTOMER_CONTRACT: RecordContract = RecordContract {
    record: "Customer",
    fields: &[
        FieldContract::omittable("id", "id"),
        FieldContract::always("first_name", "first_name"),
        FieldContract::always("last_name", "last_name"),
        FieldContract::omittable("email", "email"),
        FieldContract::omittable("verified_email", "verified_email"),
        FieldContract::omittable("created_at", "created_at"),
        FieldContract::omittable("orders_count", "orders_count"),
        FieldContract::omittable("total_spent", "total_spent"),
        FieldContract::omittable("last_order_id", "last_order_id"),
        FieldContract::omittable("note", "note"),
    ],
};

impl WireContract for Customer {
    fn contract() -> &'static RecordContract {
        &CUSTOMER_CONTRACT
    }
}
