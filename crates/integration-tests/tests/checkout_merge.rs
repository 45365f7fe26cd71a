//! Checkout updates merged into stored orders.

#![allow(clippy::unwrap_used)]

use orderguard_core::records::{AddressInformation, Customer};
use orderguard_core::{
    OrderCheckoutUpdate, OrderCreate, OrderIdentity, Strictness, Validate, merge,
};
use orderguard_integration_tests::{ORDER_ID, sample_order};
use rust_decimal::Decimal;

fn currency_update(currency: &str) -> OrderCheckoutUpdate {
    OrderCheckoutUpdate {
        currency: Some(currency.to_owned()),
        ..OrderCheckoutUpdate::new(ORDER_ID)
    }
}

#[test]
fn test_currency_override() {
    let merged = merge(sample_order(), currency_update("EUR"));
    assert_eq!(merged.currency, "EUR");

    let merged = merge(sample_order(), OrderCheckoutUpdate::new(ORDER_ID));
    assert_eq!(merged.currency, "USD");
}

#[test]
fn test_empty_update_is_identity() {
    assert_eq!(
        merge(sample_order(), OrderCheckoutUpdate::new(ORDER_ID)),
        sample_order()
    );
}

#[test]
fn test_merge_is_idempotent() {
    let update = OrderCheckoutUpdate {
        email: Some("new@b.com".to_owned()),
        total_price: Some(Decimal::new(5999, 2)),
        shipping_address: Some(AddressInformation {
            address1: "1 Difference Engine Rd".to_owned(),
            city: "Manchester".to_owned(),
            country: "United Kingdom".to_owned(),
            ..AddressInformation::default()
        }),
        ..currency_update("GBP")
    };
    let once = merge(sample_order(), update.clone());
    let twice = merge(once.clone(), update);
    assert_eq!(once, twice);
}

#[test]
fn test_merged_order_still_validates() {
    let update = OrderCheckoutUpdate {
        browser_ip: Some("2001:db8::1".to_owned()),
        total_discounts: Some(Decimal::new(500, 2)),
        ..currency_update("EUR")
    };
    let merged = merge(sample_order(), update);
    assert!(merged.validate(Strictness::Strict).is_ok());
}

#[test]
fn test_merge_can_produce_invalid_order() {
    // Wholesale replacement drops the customer's names, which strict requires.
    let update = OrderCheckoutUpdate {
        customer: Some(Customer {
            email: Some("a@b.com".to_owned()),
            ..Customer::default()
        }),
        ..OrderCheckoutUpdate::new(ORDER_ID)
    };
    let merged = merge(sample_order(), update);
    assert!(merged.validate(Strictness::Weak).is_ok());
    let err = merged.validate(Strictness::Strict).unwrap_err();
    assert_eq!(err.path(), "Customer.First Name");
}

#[test]
fn test_identity_never_overwritten() {
    let merged = merge(sample_order(), OrderCheckoutUpdate::new("checkout-42"));
    assert_eq!(merged.id, OrderIdentity::from(ORDER_ID));
}

#[test]
fn test_merge_from_wire_update() {
    let update: OrderCheckoutUpdate = serde_json::from_value(serde_json::json!({
        "id": ORDER_ID,
        "email": "",
        "currency": "EUR",
        "nocharge_amount": {
            "refund_id": "gc-1",
            "refund_amount": 49.99,
            "currency": "EUR",
            "reason": "gift card"
        }
    }))
    .unwrap();
    assert!(update.validate(Strictness::Weak).is_ok());

    let merged: OrderCreate = merge(sample_order(), update);
    assert_eq!(merged.email, "a@b.com");
    assert_eq!(merged.currency, "EUR");
    assert!(merged.validate(Strictness::Strict).is_ok());
}
