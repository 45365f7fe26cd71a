//! Billing and shipping addresses.

use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::presence::Meaningful;
use crate::validation::{Strictness, Validate, ValidationError, rules};

/// A postal address, used for both billing and shipping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInformation {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default)]
    pub phone: String,
}

impl Validate for AddressInformation {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        if strictness.is_strict() {
            rules::valued_string(&self.first_name, "First Name")?;
            rules::valued_string(&self.last_name, "Last Name")?;
        }
        rules::valued_string(&self.address1, "Address 1")?;
        rules::valued_string(&self.city, "City")?;
        rules::valued_string(&self.country, "Country")?;
        if strictness.is_strict() {
            rules::valued_string(&self.phone, "Phone")?;
        }
        Ok(())
    }
}

impl Meaningful for AddressInformation {}

static ADDRESS_CONTRACT: RecordContract = RecordContract {
    record: "AddressInformation",
    fields: &[
        FieldContract::omittable("first_name", "first_name"),
        FieldContract::omittable("last_name", "last_name"),
        FieldContract::omittable("company", "company"),
        FieldContract::always("address1", "address1"),
        FieldContract::omittable("address2", "address2"),
        FieldContract::always("city", "city"),
        FieldContract::always("country", "country"),
        FieldContract::omittable("country_code", "country_code"),
        FieldContract::omittable("province", "province"),
        FieldContract::omittable("province_code", "province_code"),
        FieldContract::omittable("zip", "zip"),
        FieldContract::omittable("phone", "phone"),
    ],
};

impl WireContract for AddressInformation {
    fn contract() -> &'static RecordContract {
        &ADDRESS_CONTRACT
    }
}
