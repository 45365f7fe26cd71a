//! Chargeback and dispute information.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::validation::{Strictness, Validate, ValidationError, rules};

/// A chargeback filed against an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargebackDetails {
    /// Chargeback ID at the gateway.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_currency: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub chargeback_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_description: Option<String>,
    /// `cb` (chargeback), `rr` (retrieval request) and so on.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    /// Merchant ID at the acquirer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    /// Acquirer reference number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card_company: Option<String>,
    /// Deadline for the merchant's response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respond_by: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_currency: Option<String>,
}

impl Validate for ChargebackDetails {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        rules::valued_string(&self.id, "Chargeback ID")?;
        if let Some(at) = self.chargeback_at {
            rules::date_not_default(at, "Chargeback At")?;
        }
        if let Some(currency) = &self.chargeback_currency {
            rules::currency_code(currency, "Chargeback Currency")?;
        }
        if let Some(amount) = self.chargeback_amount {
            rules::non_negative(amount, "Chargeback Amount")?;
        }
        if let Some(respond_by) = self.respond_by {
            rules::date_not_default(respond_by, "Respond By")?;
        }
        if let Some(fee) = self.fee_amount {
            rules::non_negative(fee, "Fee Amount")?;
        }
        if let Some(currency) = &self.fee_currency {
            rules::currency_code(currency, "Fee Currency")?;
        }
        Ok(())
    }
}

static CHARGEBACK_DETAILS_CONTRACT: RecordContract = RecordContract {
    record: "ChargebackDetails",
    fields: &[
        FieldContract::always("id", "id"),
        FieldContract::omittable("chargeback_at", "chargeback_at"),
        FieldContract::omittable("chargeback_currency", "chargeback_currency"),
        FieldContract::omittable("chargeback_amount", "chargeback_amount"),
        FieldContract::omittable("reason_code", "reason_code"),
        FieldContract::omittable("reason_description", "reason_description"),
        FieldContract::omittable("kind", "type"),
        FieldContract::omittable("gateway", "gateway"),
        FieldContract::omittable("mid", "mid"),
        FieldContract::omittable("arn", "arn"),
        FieldContract::omittable("credit_card_company", "credit_card_company"),
        FieldContract::omittable("respond_by", "respond_by"),
        FieldContract::omittable("fee_amount", "fee_amount"),
        FieldContract::omittable("fee_currency", "fee_currency"),
    ],
};

impl WireContract for ChargebackDetails {
    fn contract() -> &'static RecordContract {
        &CHARGEBACK_DETAILS_CONTRACT
    }
}

/// State of the dispute opened by a chargeback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disputed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_resolution_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispute_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_poc_phone_number: Option<String>,
}

impl Validate for DisputeDetails {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        if let Some(at) = self.disputed_at {
            rules::date_not_default(at, "Disputed At")?;
        }
        if let Some(date) = self.expected_resolution_date {
            rules::date_not_default(date, "Expected Resolution Date")?;
        }
        Ok(())
    }
}

static DISPUTE_DETAILS_CONTRACT: RecordContract = RecordContract {
    record: "DisputeDetails",
    fields: &[
        FieldContract::omittable("case_id", "case_id"),
        FieldContract::omittable("status", "status"),
        FieldContract::omittable("disputed_at", "disputed_at"),
        FieldContract::omittable("expected_resolution_date", "expected_resolution_date"),
        FieldContract::omittable("dispute_type", "dispute_type"),
        FieldContract::omittable("issuer_poc_phone_number", "issuer_poc_phone_number"),
    ],
};

impl WireContract for DisputeDetails {
    fn contract() -> &'static RecordContract {
        &DISPUTE_DETAILS_CONTRACT
    }
}
