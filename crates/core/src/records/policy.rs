//! Merchant policy and authentication descriptors.

use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::validation::{Strictness, Validate, ValidationError};

/// How the cardholder was authenticated (3-D Secure and exemptions).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemption_method: Option<String>,
}

/// All fields are free-form.
impl Validate for AuthenticationType {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        Ok(())
    }
}

static AUTHENTICATION_TYPE_CONTRACT: RecordContract = RecordContract {
    record: "AuthenticationType",
    fields: &[
        FieldContract::omittable("description", "description"),
        FieldContract::omittable("auth_type", "auth_type"),
        FieldContract::omittable("exemption_method", "exemption_method"),
    ],
};

impl WireContract for AuthenticationType {
    fn contract() -> &'static RecordContract {
        &AUTHENTICATION_TYPE_CONTRACT
    }
}

/// Asks the service whether to evaluate the order against a policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate: Option<bool>,
}

impl Policy {
    #[must_use]
    pub const fn new(evaluate: Option<bool>) -> Self {
        Self { evaluate }
    }
}

/// Per-use-case policy decisions returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyProtect {
    #[serde(rename = "use_cases", default)]
    pub policies: Vec<UseCase>,
}

impl PolicyProtect {
    /// Decision for a use case, if the service returned one.
    #[must_use]
    pub fn decision_for(&self, use_case: &str) -> Option<&str> {
        self.policies
            .iter()
            .find(|policy| policy.policy_type.as_deref() == Some(use_case))
            .and_then(|policy| policy.decision.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    #[serde(rename = "use_case", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
}
