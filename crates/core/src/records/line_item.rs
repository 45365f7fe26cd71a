//! Products purchased in an order.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::types::{DeliveredTo, ProductType, RegistryType, TransportMethod};
use crate::validation::{Strictness, Validate, ValidationError, rules};

/// One product line of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub title: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i64,
    /// Product ID at the merchant. Required under strict validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_to: Option<DeliveredTo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_type: Option<RegistryType>,
    /// Only meaningful for travel tickets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_method: Option<TransportMethod>,
}

impl Validate for LineItem {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        rules::valued_string(&self.title, "Title")?;
        rules::non_negative(self.price, "Price")?;
        rules::positive(self.quantity, "Quantity")?;
        if strictness.is_strict() {
            rules::valued_string(self.product_id.as_deref().unwrap_or_default(), "Product ID")?;
        }
        if let Some(delivered_at) = self.delivered_at {
            rules::date_not_default(delivered_at, "Delivered At")?;
        }
        Ok(())
    }
}

static LINE_ITEM_CONTRACT: RecordContract = RecordContract {
    record: "LineItem",
    fields: &[
        FieldContract::always("title", "title"),
        FieldContract::always("price", "price"),
        FieldContract::always("quantity", "quantity"),
        FieldContract::omittable("product_id", "product_id"),
        FieldContract::omittable("sku", "sku"),
        FieldContract::omittable("brand", "brand"),
        FieldContract::omittable("category", "category"),
        FieldContract::omittable("sub_category", "sub_category"),
        FieldContract::omittable("product_type", "product_type"),
        FieldContract::omittable("requires_shipping", "requires_shipping"),
        FieldContract::omittable("delivered_to", "delivered_to"),
        FieldContract::omittable("delivered_at", "delivered_at"),
        FieldContract::omittable("registry_type", "registry_type"),
        FieldContract::omittable("transport_method", "transport_method"),
    ],
};

impl WireContract for LineItem {
    fn contract() -> &'static RecordContract {
        &LINE_ITEM_CONTRACT
    }
}
