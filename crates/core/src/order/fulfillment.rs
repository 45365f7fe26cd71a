//! Fulfillment event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate_identity;
use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::records::FulfillmentDetails;
use crate::types::OrderIdentity;
use crate::validation::{self, Strictness, Validate, ValidationError};

/// Reports the fulfillment attempts made for an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFulfillment {
    pub id: OrderIdentity,
    /// Attempts in the order they were made.
    #[serde(default)]
    pub fulfillments: Vec<FulfillmentDetails>,
}

impl OrderFulfillment {
    #[must_use]
    pub fn new(id: impl Into<OrderIdentity>, fulfillments: Vec<FulfillmentDetails>) -> Self {
        Self {
            id: id.into(),
            fulfillments,
        }
    }
}

impl Validate for OrderFulfillment {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        debug!(order_id = %self.id, %strictness, "validating fulfillment");
        validate_identity(&self.id)?;
        validation::each("Fulfillments", &self.fulfillments, strictness)
    }
}

static FULFILLMENT_CONTRACT: RecordContract = RecordContract {
    record: "OrderFulfillment",
    fields: &[
        FieldContract::always("id", "id"),
        FieldContract::always("fulfillments", "fulfillments"),
    ],
};

impl WireContract for OrderFulfillment {
    fn contract() -> &'static RecordContract {
        &FULFILLMENT_CONTRACT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::types::FulfillmentStatusCode;

    #[test]
    fn test_each_attempt_validated() {
        let shipped = FulfillmentDetails {
            fulfillment_id: "f-1".to_owned(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap(),
            status: FulfillmentStatusCode::Success,
            ..FulfillmentDetails::default()
        };
        let unnamed = FulfillmentDetails {
            fulfillment_id: String::new(),
            ..shipped.clone()
        };

        let ok = OrderFulfillment::new(1001, vec![shipped.clone()]);
        assert!(ok.validate(Strictness::Strict).is_ok());

        let bad = OrderFulfillment::new(1001, vec![shipped, unnamed]);
        let err = bad.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.path(), "Fulfillments[1].Fulfillment ID");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(OrderFulfillment::new("A-1", Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "A-1", "fulfillments": [] }));
    }
}
