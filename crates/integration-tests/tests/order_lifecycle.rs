//! End-to-end validation of every order lifecycle variant.

#![allow(clippy::unwrap_used)]

use orderguard_core::records::{AddressInformation, NoChargeDetails, PaymentOrNoCharge};
use orderguard_core::{
    FieldRule, OrderBatch, OrderCheckoutUpdate, OrderCreate, OrderVariant, RecordKind, Strictness,
    Validate, ValidationError,
};
use orderguard_integration_tests::{
    sample_chargeback, sample_fulfillment, sample_line_item, sample_order,
};
use rust_decimal::Decimal;

#[test]
fn test_complete_order_is_valid_strict() {
    assert!(sample_order().validate(Strictness::Strict).is_ok());
}

#[test]
fn test_negative_total_fails_weak_on_total_price() {
    let mut order = sample_order();
    order.total_price = Some(Decimal::new(-10, 1));

    let err = order.validate(Strictness::Weak).unwrap_err();
    assert!(matches!(
        &err,
        ValidationError::FieldFormat { field, rule: FieldRule::NonNegative } if field == "Total Price"
    ));
}

#[test]
fn test_no_charge_order_is_valid() {
    let mut order = sample_order();
    order.payment = Some(PaymentOrNoCharge::NoCharge(NoChargeDetails {
        refund_id: "gc-77".to_owned(),
        amount: Decimal::new(4999, 2),
        currency: "USD".to_owned(),
        reason: "gift card".to_owned(),
    }));
    assert!(order.validate(Strictness::Strict).is_ok());
}

#[test]
fn test_missing_payment_reports_both_alternatives() {
    let mut order = sample_order();
    order.payment = None;

    let err = order.validate(Strictness::Weak).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingExclusiveField {
            first: "Payment Details".to_owned(),
            second: "No Charge Details".to_owned(),
        }
    );
}

#[test]
fn test_weak_accepts_single_address_strict_does_not() {
    let mut order = sample_order();
    order.billing_address = None;

    assert!(order.validate(Strictness::Weak).is_ok());
    let err = order.validate(Strictness::Strict).unwrap_err();
    assert_eq!(err.field(), "Billing Address");
}

#[test]
fn test_second_line_item_error_is_labelled() {
    let mut order = sample_order();
    let mut bad = sample_line_item();
    bad.quantity = 0;
    order.line_items.push(bad);

    let err = order.validate(Strictness::Weak).unwrap_err();
    assert_eq!(err.path(), "Line Items[1].Quantity");
    assert_eq!(err.rule(), FieldRule::Positive);
}

#[test]
fn test_every_fixture_variant_validates() {
    let variants: Vec<OrderVariant> = vec![
        sample_order().into(),
        OrderCheckoutUpdate::new(1001).into(),
        sample_fulfillment().into(),
        sample_chargeback().into(),
    ];
    for variant in &variants {
        for strictness in [Strictness::Weak, Strictness::Strict] {
            assert!(
                variant.validate(strictness).is_ok(),
                "{} failed under {strictness}",
                variant.kind()
            );
        }
    }
}

#[test]
fn test_fulfillment_with_sentinel_date_fails() {
    let mut fulfillment = sample_fulfillment();
    fulfillment.fulfillments[0].created_at = chrono::DateTime::default();

    let err = fulfillment.validate(Strictness::Weak).unwrap_err();
    assert_eq!(err.path(), "Fulfillments[0].Created At");
    assert_eq!(err.rule(), FieldRule::DateNotDefault);
}

#[test]
fn test_chargeback_bad_currency() {
    let mut chargeback = sample_chargeback();
    chargeback.chargeback_details.chargeback_currency = Some("usd".to_owned());

    let err = chargeback.validate(Strictness::Weak).unwrap_err();
    assert_eq!(err.path(), "Chargeback Details.Chargeback Currency");
}

#[test]
fn test_yaml_record_decodes_by_kind() {
    let yaml = r"
id: ord-9
fulfillments:
  - fulfillment_id: f-1
    created_at: 2024-03-02T09:30:00Z
    status: success
";
    let value: serde_json::Value = serde_yaml::from_str(yaml).unwrap();
    let record = OrderVariant::deserialize(RecordKind::Fulfillment, value).unwrap();
    assert_eq!(record.kind(), RecordKind::Fulfillment);
    assert!(record.validate(Strictness::Strict).is_ok());
}

#[test]
fn test_decoded_card_without_number_is_rejected() {
    let mut json = serde_json::to_value(sample_order()).unwrap();
    json["payment_details"]
        .as_object_mut()
        .unwrap()
        .remove("credit_card_number");

    let order: OrderCreate = serde_json::from_value(json).unwrap();
    let err = order.validate(Strictness::Weak).unwrap_err();
    assert_eq!(err.path(), "Payment Details.Credit Card Number");
    assert_eq!(err.rule(), FieldRule::Required);
}

#[test]
fn test_decoded_no_charge_without_amount_fails_to_decode() {
    let mut json = serde_json::to_value(sample_order()).unwrap();
    let fields = json.as_object_mut().unwrap();
    fields.remove("payment_details");
    fields.insert(
        "nocharge_amount".to_owned(),
        serde_json::json!({ "refund_id": "r", "currency": "USD", "reason": "gift" }),
    );
    assert!(serde_json::from_value::<OrderCreate>(json).is_err());
}

#[test]
fn test_weak_checks_billing_and_skips_blank_shipping() {
    let mut order = sample_order();
    order.shipping_address = Some(AddressInformation::default());
    assert!(order.validate(Strictness::Weak).is_ok());
}

#[test]
fn test_batch_of_lifecycle_records() {
    let batch: OrderBatch = [
        OrderVariant::from(sample_order()),
        sample_fulfillment().into(),
        sample_chargeback().into(),
    ]
    .into_iter()
    .collect();
    assert!(batch.validate(Strictness::Strict).is_ok());
    let json = serde_json::to_value(&batch).unwrap();
    assert_eq!(json["orders"].as_array().map(Vec::len), Some(3));
}
