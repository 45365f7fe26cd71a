//! Fulfillment attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::records::LineItem;
use crate::types::FulfillmentStatusCode;
use crate::validation::{self, Strictness, Validate, ValidationError, rules};

/// One attempt to ship or deliver (part of) an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentDetails {
    #[serde(default)]
    pub fulfillment_id: String,
    /// When the attempt was made. Left at the epoch default it fails
    /// validation.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    pub status: FulfillmentStatusCode,
    /// Items covered by this attempt; the whole order when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_numbers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_urls: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Validate for FulfillmentDetails {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        rules::valued_string(&self.fulfillment_id, "Fulfillment ID")?;
        rules::date_not_default(self.created_at, "Created At")?;
        if let Some(line_items) = &self.line_items {
            validation::each("Line Items", line_items, strictness)?;
        }
        Ok(())
    }
}

static FULFILLMENT_DETAILS_CONTRACT: RecordContract = RecordContract {
    record: "FulfillmentDetails",
    fields: &[
        FieldContract::always("fulfillment_id", "fulfillment_id"),
        FieldContract::always("created_at", "created_at"),
        FieldContract::always("status", "status"),
        FieldContract::omittable("line_items", "line_items"),
        FieldContract::omittable("tracking_company", "tracking_company"),
        FieldContract::omittable("tracking_numbers", "tracking_numbers"),
        FieldContract::omittable("tracking_urls", "tracking_urls"),
        FieldContract::omittable("message", "message"),
        FieldContract::omittable("receipt", "receipt"),
    ],
};

impl WireContract for FulfillmentDetails {
    fn contract() -> &'static RecordContract {
        &FULFILLMENT_DETAILS_CONTRACT
    }
}
