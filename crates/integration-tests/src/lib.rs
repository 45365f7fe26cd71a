//! Integration tests for Orderguard.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p orderguard-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_lifecycle` - Validation of every record variant end to end
//! - `checkout_merge` - Checkout updates merged into stored orders
//! - `wire_contract` - Serde keys against the published wire tables
//!
//! This crate holds the shared fixtures. Each builds a record that validates
//! under [`Strictness::Strict`](orderguard_core::Strictness::Strict).

use chrono::{DateTime, TimeZone, Utc};
use orderguard_core::records::{
    AddressInformation, ChargebackDetails, CreditCardPaymentDetails, Customer, DisputeDetails,
    FulfillmentDetails, LineItem, PaymentDetails, PaymentOrNoCharge, ShippingLine,
};
use orderguard_core::{
    FulfillmentStatusCode, OrderChargeback, OrderCreate, OrderFulfillment, OrderIdentity,
};
use rust_decimal::Decimal;

/// Identity shared by every fixture.
pub const ORDER_ID: i64 = 1001;

/// When the fixture order was placed.
#[must_use]
pub fn placed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

#[must_use]
pub fn sample_address() -> AddressInformation {
    AddressInformation {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        address1: "12 Analytical Way".to_owned(),
        city: "London".to_owned(),
        country: "United Kingdom".to_owned(),
        country_code: Some("GB".to_owned()),
        zip: Some("N1 9GU".to_owned()),
        phone: "+44 20 7946 0000".to_owned(),
        ..AddressInformation::default()
    }
}

#[must_use]
pub fn sample_customer() -> Customer {
    Customer {
        id: Some("cust-7".to_owned()),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: Some("a@b.com".to_owned()),
        verified_email: Some(true),
        orders_count: Some(3),
        ..Customer::default()
    }
}

#[must_use]
pub fn sample_line_item() -> LineItem {
    LineItem {
        title: "Widget".to_owned(),
        price: Decimal::new(4499, 2),
        quantity: 1,
        product_id: Some("w-1".to_owned()),
        sku: Some("WID-001".to_owned()),
        ..LineItem::default()
    }
}

#[must_use]
pub fn sample_payment() -> PaymentOrNoCharge {
    PaymentOrNoCharge::Payment(PaymentDetails::CreditCard(CreditCardPaymentDetails {
        credit_card_bin: "424242".to_owned(),
        credit_card_company: "Visa".to_owned(),
        credit_card_number: "XXXX-XXXX-XXXX-4242".to_owned(),
        avs_result_code: "Y".to_owned(),
        cvv_result_code: "M".to_owned(),
        authorization_id: Some("auth-1".to_owned()),
    }))
}

/// Order 1001: one line item, one shipping line, card payment, 49.99 USD.
#[must_use]
pub fn sample_order() -> OrderCreate {
    OrderCreate {
        id: OrderIdentity::from(ORDER_ID),
        email: "a@b.com".to_owned(),
        customer: Some(sample_customer()),
        billing_address: Some(sample_address()),
        shipping_address: Some(sample_address()),
        line_items: vec![sample_line_item()],
        shipping_lines: vec![ShippingLine {
            title: "Standard".to_owned(),
            price: Decimal::new(500, 2),
            code: Some("STD".to_owned()),
        }],
        payment: Some(sample_payment()),
        gateway: "stripe".to_owned(),
        browser_ip: "203.0.113.7".to_owned(),
        currency: "USD".to_owned(),
        total_price: Some(Decimal::new(4999, 2)),
        created_at: placed_at(),
        updated_at: placed_at(),
        cart_token: Some("cart-1001".to_owned()),
        ..OrderCreate::default()
    }
}

#[must_use]
pub fn sample_fulfillment_details() -> FulfillmentDetails {
    FulfillmentDetails {
        fulfillment_id: "ful-1".to_owned(),
        created_at: placed_at(),
        status: FulfillmentStatusCode::Success,
        tracking_company: Some("Royal Mail".to_owned()),
        tracking_numbers: Some("RM123456789GB".to_owned()),
        ..FulfillmentDetails::default()
    }
}

#[must_use]
pub fn sample_fulfillment() -> OrderFulfillment {
    OrderFulfillment::new(ORDER_ID, vec![sample_fulfillment_details()])
}

#[must_use]
pub fn sample_chargeback() -> OrderChargeback {
    OrderChargeback {
        id: OrderIdentity::from(ORDER_ID),
        chargeback_details: ChargebackDetails {
            id: "cb-1".to_owned(),
            chargeback_at: Some(placed_at()),
            chargeback_currency: Some("USD".to_owned()),
            chargeback_amount: Some(Decimal::new(4999, 2)),
            reason_code: Some("4837".to_owned()),
            ..ChargebackDetails::default()
        },
        fulfillments: vec![sample_fulfillment_details()],
        dispute_details: DisputeDetails {
            case_id: Some("case-1".to_owned()),
            disputed_at: Some(placed_at()),
            ..DisputeDetails::default()
        },
    }
}
