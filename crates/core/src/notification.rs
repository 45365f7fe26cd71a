//! Decision notifications pushed by the review service.
//!
//! The service calls back the merchant's endpoint once an order has been
//! reviewed. Signature checking happens in the transport layer; this module
//! only parses the body.

use serde::{Deserialize, Serialize};

use crate::records::Custom;

/// A review decision for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNotification {
    /// Merchant order identity the decision is about.
    pub id: String,
    /// New review status (`approved`, `declined`, ...).
    pub status: String,
    #[serde(rename = "oldStatus", default, skip_serializing_if = "Option::is_none")]
    pub old_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Custom>,
}

#[derive(Deserialize)]
struct NotificationEnvelope {
    order: DecisionNotification,
}

impl DecisionNotification {
    /// Parse a notification body of the form `{"order": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns a JSON error when the body is malformed or `id`/`status` are
    /// missing.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<NotificationEnvelope>(body).map(|envelope| envelope.order)
    }

    /// Returns `true` when the status changed with this notification.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        self.old_status
            .as_deref()
            .is_some_and(|old| old != self.status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notification() {
        let body = r#"{"order": {
            "id": "1001",
            "status": "approved",
            "oldStatus": "submitted",
            "description": "Reviewed and approved",
            "custom": {"app_dom_id": "web"}
        }}"#;
        let notification = DecisionNotification::from_json(body).unwrap();
        assert_eq!(notification.id, "1001");
        assert_eq!(notification.old_status.as_deref(), Some("submitted"));
        assert_eq!(
            notification.custom.and_then(|c| c.app_dom_id).as_deref(),
            Some("web")
        );
    }

    #[test]
    fn test_transition() {
        let body = r#"{"order": {"id": "1", "status": "declined", "oldStatus": "declined"}}"#;
        assert!(!DecisionNotification::from_json(body).unwrap().is_transition());
    }

    #[test]
    fn test_missing_status_rejected() {
        assert!(DecisionNotification::from_json(r#"{"order": {"id": "1"}}"#).is_err());
    }
}
