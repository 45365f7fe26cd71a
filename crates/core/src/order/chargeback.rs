//! Chargeback event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate_identity;
use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::records::{ChargebackDetails, DisputeDetails, FulfillmentDetails};
use crate::types::OrderIdentity;
use crate::validation::{self, Strictness, Validate, ValidationError};

/// Reports a chargeback against an order, together with how the order was
/// fulfilled and where the dispute stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChargeback {
    pub id: OrderIdentity,
    #[serde(default)]
    pub chargeback_details: ChargebackDetails,
    #[serde(default)]
    pub fulfillments: Vec<FulfillmentDetails>,
    #[serde(default)]
    pub dispute_details: DisputeDetails,
}

impl Validate for OrderChargeback {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        debug!(order_id = %self.id, %strictness, "validating chargeback");
        validate_identity(&self.id)?;
        validation::nested("Chargeback Details", &self.chargeback_details, strictness)?;
        validation::each("Fulfillments", &self.fulfillments, strictness)?;
        validation::nested("Dispute Details", &self.dispute_details, strictness)
    }
}

static CHARGEBACK_CONTRACT: RecordContract = RecordContract {
    record: "OrderChargeback",
    fields: &[
        FieldContract::always("id", "id"),
        FieldContract::always("chargeback_details", "chargeback_details"),
        FieldContract::always("fulfillments", "fulfillments"),
        FieldContract::always("dispute_details", "dispute_details"),
    ],
};

impl WireContract for OrderChargeback {
    fn contract() -> &'static RecordContract {
        &CHARGEBACK_CONTRACT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_details_checked_after_identity() {
        let chargeback = OrderChargeback {
            id: OrderIdentity::from("ord-5"),
            ..OrderChargeback::default()
        };
        let err = chargeback.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.path(), "Chargeback Details.Chargeback ID");
    }

    #[test]
    fn test_minimal_chargeback_is_valid() {
        let chargeback = OrderChargeback {
            id: OrderIdentity::from("ord-5"),
            chargeback_details: ChargebackDetails {
                id: "cb-1".to_owned(),
                ..ChargebackDetails::default()
            },
            ..OrderChargeback::default()
        };
        assert!(chargeback.validate(Strictness::Strict).is_ok());

        let json = serde_json::to_value(&chargeback).unwrap();
        assert!(OrderChargeback::contract().missing_required(&json).is_empty());
    }
}
