//! Outcome of submitting an order to the review service.

use serde::{Deserialize, Serialize};

/// Errors for a response body that is neither a clean success nor a clean
/// failure.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionResultError {
    /// Both `order` and `error` were populated.
    #[error("transaction result carries both a success and an error")]
    Both,
    /// Neither `order` nor `error` was populated.
    #[error("transaction result carries neither a success nor an error")]
    Neither,
}

/// The service acknowledged the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulOrderTransaction {
    /// Identifier assigned by the service.
    pub id: serde_json::Value,
    /// Review status (`submitted`, `approved`, `declined`, ...).
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The service rejected the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedTransaction {
    #[serde(rename = "message")]
    pub error_message: String,
}

/// Exactly one of success or failure.
///
/// Deserializes from `{"order": {...}}` or `{"error": {"message": ...}}`;
/// any other shape is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransactionResult", into = "RawTransactionResult")]
pub enum OrderTransactionResult {
    Success(SuccessfulOrderTransaction),
    Failure(FailedTransaction),
}

impl OrderTransactionResult {
    /// Returns `true` when the service acknowledged the order.
    #[must_use]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns a JSON error for malformed bodies, including bodies carrying
    /// both or neither outcome.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawTransactionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    order: Option<SuccessfulOrderTransaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<FailedTransaction>,
}

impl TryFrom<RawTransactionResult> for OrderTransactionResult {
    type Error = TransactionResultError;

    fn try_from(raw: RawTransactionResult) -> Result<Self, Self::Error> {
        match (raw.order, raw.error) {
            (Some(order), None) => Ok(Self::Success(order)),
            (None, Some(error)) => Ok(Self::Failure(error)),
            (Some(_), Some(_)) => Err(TransactionResultError::Both),
            (None, None) => Err(TransactionResultError::Neither),
        }
    }
}

impl From<OrderTransactionResult> for RawTransactionResult {
    fn from(result: OrderTransactionResult) -> Self {
        match result {
            OrderTransactionResult::Success(order) => Self {
                order: Some(order),
                error: None,
            },
            OrderTransactionResult::Failure(error) => Self {
                order: None,
                error: Some(error),
            },
        }
    }
}
