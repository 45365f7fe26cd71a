//! Full order snapshot sent when an order is placed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validate_identity;
use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::records::{
    AddressInformation, Custom, Customer, DiscountCode, LineItem, PaymentOrNoCharge, ShippingLine,
};
use crate::types::OrderIdentity;
use crate::validation::{self, Strictness, Validate, ValidationError, rules};

/// A complete order.
///
/// Records may be built incrementally; nothing is checked until
/// [`Validate::validate`] is called. Timestamps left at their default (the
/// Unix epoch) fail validation, as does a `payment` slot left at `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Merchant order identity.
    pub id: OrderIdentity,
    /// Contact email for the order.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressInformation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AddressInformation>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub shipping_lines: Vec<ShippingLine>,
    /// Payment details or the no-charge rationale. Exactly one must be set.
    #[serde(flatten, with = "crate::records::payment_slot")]
    pub payment: Option<PaymentOrNoCharge>,
    /// Payment gateway used.
    #[serde(default)]
    pub gateway: String,
    /// IP of the browser the customer ordered from.
    #[serde(default)]
    pub browser_ip: String,
    /// ISO 4217 currency of every amount on the order.
    #[serde(default)]
    pub currency: String,
    /// Sum of all item prices, taxes and discounts included.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
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
    /// Session the order was created in; must match the beacon's session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cart_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// `paid`, `voided`, `refunded`, `partly_paid`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    /// Channel the order came from (`web`, `mobile_app`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Custom>,
}

impl OrderCreate {
    fn validate_addresses(&self, strictness: Strictness) -> Result<(), ValidationError> {
        match strictness {
            Strictness::Strict => {
                validation::required_nested(
                    "Billing Address",
                    self.billing_address.as_ref(),
                    strictness,
                )?;
                validation::required_nested(
                    "Shipping Address",
                    self.shipping_address.as_ref(),
                    strictness,
                )
            }
            // Only one address is checked: billing when present, else shipping.
            Strictness::Weak => match (&self.billing_address, &self.shipping_address) {
                (Some(billing), _) => validation::nested("Billing Address", billing, strictness),
                (None, Some(shipping)) => {
                    validation::nested("Shipping Address", shipping, strictness)
                }
                (None, None) => Err(ValidationError::exclusive(
                    "Billing Address",
                    "Shipping Address",
                )),
            },
        }
    }
}

impl Validate for OrderCreate {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        debug!(order_id = %self.id, %strictness, "validating order");

        validate_identity(&self.id)?;
        validation::each("Line Items", &self.line_items, strictness)?;
        validation::each("Shipping Lines", &self.shipping_lines, strictness)?;

        let payment = self
            .payment
            .as_ref()
            .ok_or_else(|| ValidationError::exclusive("Payment Details", "No Charge Details"))?;
        payment.validate(strictness)?;

        self.validate_addresses(strictness)?;
        validation::required_nested("Customer", self.customer.as_ref(), strictness)?;

        rules::email(&self.email, "Email")?;
        rules::ip_address(&self.browser_ip, "Browser IP")?;
        rules::currency_code(&self.currency, "Currency")?;
        rules::non_negative(
            *rules::required(self.total_price.as_ref(), "Total Price")?,
            "Total Price",
        )?;
        rules::valued_string(&self.gateway, "Gateway")?;
        rules::date_not_default(self.created_at, "Created At")?;
        rules::date_not_default(self.updated_at, "Updated At")?;

        if let Some(discount_codes) = &self.discount_codes {
            validation::each("Discount Codes", discount_codes, strictness)?;
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
        if let Some(custom) = &self.custom {
            validation::nested("Custom", custom, strictness)?;
        }
        Ok(())
    }
}

static ORDER_CREATE_CONTRACT: RecordContract = RecordContract {
    record: "OrderCreate",
    fields: &[
        FieldContract::always("id", "id"),
        FieldContract::always("email", "email"),
        FieldContract::always("customer", "customer"),
        FieldContract::omittable("billing_address", "billing_address"),
        FieldContract::omittable("shipping_address", "shipping_address"),
        FieldContract::always("line_items", "line_items"),
        FieldContract::always("shipping_lines", "shipping_lines"),
        FieldContract::omittable("payment", "payment_details"),
        FieldContract::omittable("payment", "nocharge_amount"),
        FieldContract::always("gateway", "gateway"),
        FieldContract::always("browser_ip", "browser_ip"),
        FieldContract::always("currency", "currency"),
        FieldContract::always("total_price", "total_price"),
        FieldContract::always("created_at", "created_at"),
        FieldContract::always("updated_at", "updated_at"),
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

impl WireContract for OrderCreate {
    fn contract() -> &'static RecordContract {
        &ORDER_CREATE_CONTRACT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::records::{CreditCardPaymentDetails, NoChargeDetails, PaymentDetails};
    use crate::validation::FieldRule;

    fn address() -> AddressInformation {
        AddressInformation {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            address1: "12 Analytical Way".to_owned(),
            city: "London".to_owned(),
            country: "United Kingdom".to_owned(),
            phone: "+44 20 7946 0000".to_owned(),
            ..AddressInformation::default()
        }
    }

    fn order() -> OrderCreate {
        let placed = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        OrderCreate {
            id: OrderIdentity::from(1001),
            email: "a@b.com".to_owned(),
            customer: Some(Customer {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                email: Some("a@b.com".to_owned()),
                ..Customer::default()
            }),
            billing_address: Some(address()),
            shipping_address: Some(address()),
            line_items: vec![LineItem {
                title: "Widget".to_owned(),
                price: Decimal::new(4499, 2),
                quantity: 1,
                product_id: Some("w-1".to_owned()),
                ..LineItem::default()
            }],
            shipping_lines: vec![ShippingLine {
                title: "Standard".to_owned(),
                price: Decimal::new(500, 2),
                code: None,
            }],
            payment: Some(PaymentOrNoCharge::Payment(PaymentDetails::CreditCard(
                CreditCardPaymentDetails {
                    credit_card_bin: "424242".to_owned(),
                    credit_card_company: "Visa".to_owned(),
                    credit_card_number: "XXXX-XXXX-XXXX-4242".to_owned(),
                    avs_result_code: "Y".to_owned(),
                    cvv_result_code: "M".to_owned(),
                    authorization_id: None,
                },
            ))),
            gateway: "stripe".to_owned(),
            browser_ip: "203.0.113.7".to_owned(),
            currency: "USD".to_owned(),
            total_price: Some(Decimal::new(4999, 2)),
            created_at: placed,
            updated_at: placed,
            ..OrderCreate::default()
        }
    }

    #[test]
    fn test_complete_order_is_valid_under_both_levels() {
        assert!(order().validate(Strictness::Strict).is_ok());
        assert!(order().validate(Strictness::Weak).is_ok());
    }

    #[test]
    fn test_single_address_is_weak_only() {
        let mut o = order();
        o.billing_address = None;
        assert!(o.validate(Strictness::Weak).is_ok());
        let err = o.validate(Strictness::Strict).unwrap_err();
        assert_eq!(err.field(), "Billing Address");
        assert_eq!(err.rule(), FieldRule::Required);

        let mut o = order();
        o.shipping_address = None;
        assert!(o.validate(Strictness::Weak).is_ok());
        let err = o.validate(Strictness::Strict).unwrap_err();
        assert_eq!(err.field(), "Shipping Address");
    }

    #[test]
    fn test_no_address_fails_weak_with_exclusive_error() {
        let mut o = order();
        o.billing_address = None;
        o.shipping_address = None;
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingExclusiveField {
                first: "Billing Address".to_owned(),
                second: "Shipping Address".to_owned(),
            }
        );
    }

    #[test]
    fn test_weak_checks_shipping_only_without_billing() {
        let mut o = order();
        o.billing_address = None;
        o.shipping_address = Some(AddressInformation::default());
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.path(), "Shipping Address.Address 1");
    }

    #[test]
    fn test_weak_ignores_shipping_when_billing_present() {
        let mut o = order();
        o.shipping_address = Some(AddressInformation::default());
        assert!(o.validate(Strictness::Weak).is_ok());

        let err = o.validate(Strictness::Strict).unwrap_err();
        assert_eq!(err.path(), "Shipping Address.First Name");
    }

    #[test]
    fn test_malformed_no_charge_is_a_decode_error() {
        let mut json = serde_json::to_value(order()).unwrap();
        let fields = json.as_object_mut().unwrap();
        fields.remove("payment_details");
        fields.insert(
            "nocharge_amount".to_owned(),
            serde_json::json!({ "refund_id": "r", "currency": "USD", "reason": "gift" }),
        );
        let err = serde_json::from_value::<OrderCreate>(json).unwrap_err();
        assert!(err.to_string().contains("refund_amount"), "{err}");
    }

    #[test]
    fn test_card_missing_number_fails_validation() {
        let mut json = serde_json::to_value(order()).unwrap();
        json["payment_details"]
            .as_object_mut()
            .unwrap()
            .remove("credit_card_number");
        let parsed: OrderCreate = serde_json::from_value(json).unwrap();
        let err = parsed.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.path(), "Payment Details.Credit Card Number");
        assert_eq!(err.rule(), FieldRule::Required);
    }

    #[test]
    fn test_unset_payment_fails_under_both_levels() {
        let mut o = order();
        o.payment = None;
        for strictness in [Strictness::Weak, Strictness::Strict] {
            let err = o.validate(strictness).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingExclusiveField {
                    first: "Payment Details".to_owned(),
                    second: "No Charge Details".to_owned(),
                }
            );
        }
    }

    #[test]
    fn test_no_charge_satisfies_payment_slot() {
        let mut o = order();
        o.payment = Some(PaymentOrNoCharge::NoCharge(NoChargeDetails {
            refund_id: "gc-9".to_owned(),
            amount: Decimal::new(4999, 2),
            currency: "USD".to_owned(),
            reason: "gift card".to_owned(),
        }));
        assert!(o.validate(Strictness::Strict).is_ok());
    }

    #[test]
    fn test_negative_total_price() {
        let mut o = order();
        o.total_price = Some(Decimal::new(-1, 0));
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FieldFormat {
                field: "Total Price".to_owned(),
                rule: FieldRule::NonNegative,
            }
        );
    }

    #[test]
    fn test_missing_total_price() {
        let mut o = order();
        o.total_price = None;
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.field(), "Total Price");
        assert_eq!(err.rule(), FieldRule::Required);
    }

    #[test]
    fn test_unset_timestamp() {
        let mut o = order();
        o.updated_at = DateTime::<Utc>::default();
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.field(), "Updated At");
        assert_eq!(err.rule(), FieldRule::DateNotDefault);
    }

    #[test]
    fn test_optional_scalars_checked_only_when_present() {
        let mut o = order();
        o.closed_at = None;
        o.total_discounts = None;
        assert!(o.validate(Strictness::Weak).is_ok());

        o.total_discounts = Some(Decimal::new(-250, 2));
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.field(), "Total Discounts");

        o.total_discounts = None;
        o.closed_at = Some(DateTime::<Utc>::default());
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.field(), "Closed At");
    }

    #[test]
    fn test_fail_fast_reports_first_declared_field() {
        let mut o = order();
        o.email = "nope".to_owned();
        o.currency = "us".to_owned();
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.field(), "Email");
    }

    #[test]
    fn test_line_item_error_is_nested() {
        let mut o = order();
        o.line_items.push(LineItem {
            title: "Broken".to_owned(),
            price: Decimal::new(-1, 0),
            quantity: 1,
            ..LineItem::default()
        });
        let err = o.validate(Strictness::Weak).unwrap_err();
        assert!(matches!(err, ValidationError::Nested { .. }));
        assert_eq!(err.path(), "Line Items[1].Price");
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(order()).unwrap();
        assert!(json.get("payment_details").is_some());
        assert!(json.get("nocharge_amount").is_none());
        assert_eq!(json["total_price"], serde_json::json!(49.99));
        assert!(OrderCreate::contract().missing_required(&json).is_empty());
        assert!(OrderCreate::contract().unknown_keys(&json).is_empty());
    }

    #[test]
    fn test_wire_round_trip_keeps_payment_slot() {
        let original = order();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: OrderCreate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.payment, original.payment);
        assert_eq!(parsed.total_price, original.total_price);
    }
}
