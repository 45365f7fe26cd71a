//! Enumerated values carried on order records.
//!
//! Wire values are the lowercase strings the review service expects.

use serde::{Deserialize, Serialize};

/// Outcome of a single fulfillment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatusCode {
    #[default]
    Success,
    Cancelled,
    Error,
    Failure,
}

/// Kind of product sold on a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    Digital,
    Downloadable,
    Physical,
    Composite,
    #[serde(rename = "event")]
    EventTicket,
    #[serde(rename = "travel")]
    TravelTicket,
    Accommodation,
    #[serde(rename = "ride")]
    RideTicket,
}

/// Where a line item is handed over to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveredTo {
    ShippingAddress,
    StorePickup,
}

/// Gift registry a line item was bought from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryType {
    Wedding,
    Baby,
    Other,
}

/// Transport used by a travel ticket line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMethod {
    Plane,
    Ship,
    Bus,
    Train,
}

/// Merchant-side status of an order, reported back to the review service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalStatus {
    Approved,
    Checkout,
    Cancelled,
    Declined,
    DeclinedFraud,
    ChargebackFraud,
    ChargebackNotFraud,
}

impl std::fmt::Display for ExternalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Approved => "approved",
            Self::Checkout => "checkout",
            Self::Cancelled => "cancelled",
            Self::Declined => "declined",
            Self::DeclinedFraud => "declined_fraud",
            Self::ChargebackFraud => "chargeback_fraud",
            Self::ChargebackNotFraud => "chargeback_not_fraud",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_type_wire_names() {
        let json = serde_json::to_string(&ProductType::EventTicket).unwrap();
        assert_eq!(json, "\"event\"");
        let parsed: ProductType = serde_json::from_str("\"ride\"").unwrap();
        assert_eq!(parsed, ProductType::RideTicket);
    }

    #[test]
    fn test_external_status_display_matches_wire() {
        for status in [
            ExternalStatus::Approved,
            ExternalStatus::DeclinedFraud,
            ExternalStatus::ChargebackNotFraud,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_delivered_to_wire_names() {
        let json = serde_json::to_string(&DeliveredTo::StorePickup).unwrap();
        assert_eq!(json, "\"store_pickup\"");
    }
}
