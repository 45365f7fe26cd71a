//! Merchant-specific data attached to an order.

use serde::{Deserialize, Serialize};

use crate::presence::Meaningful;
use crate::validation::{Strictness, Validate, ValidationError};

/// Free-form data the review service passes back untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Custom {
    /// Originating system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_dom_id: Option<String>,
}

impl Validate for Custom {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Meaningful for Custom {}
