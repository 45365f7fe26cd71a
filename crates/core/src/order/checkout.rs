//! Sparse checkout update.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate_identity;
use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::presence::Presence;
use crate::records::{
    AddressInformation, Custom, Customer, DiscountCode, LineItem, PaymentOrNoCharge, ShippingLine,
};
use crate::types::OrderIdentity;
use crate::validation::{self, Strictness, Validate, ValidationError, rules};

/// A partially populated echo of [`OrderCreate`](super::OrderCreate),
/// captured while the customer is still checking out.
///
/// Every field other than the identity is optional. A checkout update is
/// merged into a stored order with [`merge`](crate::merge::merge) rather than
/// sent on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCheckoutUpdate {
    pub id: OrderIdentity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AddressInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,
    #[serde(flatten, with = "crate::records::payment_slot")]
    pub payment: Option<PaymentOrNoCharge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_discounts: Option<Decimal>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_price_usd: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Custom>,
}

impl OrderCheckoutUpdate {
    /// An update carrying only the identity.
    #[must_use]
    pub fn new(id: impl Into<OrderIdentity>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Checkout updates are only checked structurally: the identity must be set
/// and whatever *is* present must be well-formed under [`Strictness::Weak`].
/// The requested strictness is ignored.
impl Validate for OrderCheckoutUpdate {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        debug!(order_id = %self.id, %strictness, "validating checkout update structurally");
        let weak = Strictness::Weak;

        validate_identity(&self.id)?;
        if let Some(line_items) = &self.line_items {
            validation::each("Line Items", line_items, weak)?;
        }
        if let Some(shipping_lines) = &self.shipping_lines {
            validation::each("Shipping Lines", shipping_lines, weak)?;
        }
        if let Some(payment) = &self.payment {
            payment.validate(weak)?;
        }
        if let Some(billing) = &self.billing_address {
            validation::nested("Billing Address", billing, weak)?;
        }
        if let Some(shipping) = &self.shipping_address {
            validation::nested("Shipping Address", shipping, weak)?;
        }
        if let Some(customer) = &self.customer {
            validation::nested("Customer", customer, weak)?;
        }
        if let Some(email) = self.email.present() {
            rules::email(email, "Email")?;
        }
        if let Some(browser_ip) = self.browser_ip.present() {
            rules::ip_address(browser_ip, "Browser IP")?;
        }
        if let Some(currency) = self.currency.present() {
            rules::currency_code(currency, "Currency")?;
        }
        if let Some(total_price) = self.total_price {
            rules::non_negative(total_price, "Total Price")?;
        }
        if let Some(created_at) = self.created_at {
            rules::date_not_default(created_at, "Created At")?;
        }
        if let Some(updated_at) = self.updated_at {
            rules::date_not_default(updated_at, "Updated At")?;
        }
        if let Some(discount_codes) = &self.discount_codes {
            validation::each("Discount Codes", discount_codes, weak)?;
        }
        if let Some(total_price_usd) = self.total_price_usd {
            rules::non_negative(total_price_usd, "Total Price USD")?;
        }
        if let Some(total_discounts) = self.total_discounts {
            rules::non_negative(total_discounts, "Total Discounts")?;
        }
        if let Some(closed_at) = self.closed_at {
            rules::date_not_default(closed_at, "Closed At")?;
        }
        Ok(())
    }
}

static CHECKOUT_CONTRACT: RecordContract = RecordContract {
    record: "OrderCheckoutUpdate",
    fields: &[
        FieldContract::always("id", "id"),
        FieldContract::omittable("email", "email"),
        FieldContract::omittable("customer", "customer"),
        FieldContract::omittable("billing_address", "billing_address"),
        FieldContract::omittable("shipping_address", "shipping_address"),
        FieldContract::omittable("line_items", "line_items"),
        FieldContract::omittable("shipping_lines", "shipping_lines"),
        FieldContract::omittable("payment", "payment_details"),
        FieldContract::omittable("payment", "nocharge_amount"),
        FieldContract::omittable("gateway", "gateway"),
        FieldContract::omittable("browser_ip", "browser_ip"),
        FieldContract::omittable("currency", "currency"),
        FieldContract::omittable("total_price", "total_price"),
        FieldContract::omittable("created_at", "created_at"),
        FieldContract::omittable("updated_at", "updated_at"),
        FieldContract::omittable("discount_codes", "discount_codes"),
        FieldContract::omittable("total_discounts", "total_discounts"),
        FieldContract::omittable("total_price_usd", "total_price_usd"),
        FieldContract::omittable("cart_token", "cart_token"),
        FieldContract::omittable("closed_at", "closed_at"),
        FieldContract::omittable("financial_status", "financial_status"),
        FieldContract::omittable("fulfillment_status", "fulfillment_status"),
        FieldContract::omittable("source", "source"),
        FieldContract::omittable("vendor_id", "vendor_id"),
        FieldContract::omittable("vendor_name", "vendor_name"),
        FieldContract::omittable("custom", "custom"),
    ],
};

impl WireContract for OrderCheckoutUpdate {
    fn contract() -> &'static RecordContract {
        &CHECKOUT_CONTRACT
    }
}
