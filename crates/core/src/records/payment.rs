//! How an order was paid for.
//!
//! An order is either charged through a payment method or settled without a
//! chargeable payment (gift cards, cash, store credit). The two are modelled
//! as one slot, [`PaymentOrNoCharge`], so an order can never carry both.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::{FieldContract, RecordContract, WireContract};
use crate::presence::Meaningful;
use crate::validation::{self, Strictness, Validate, ValidationError, rules};

/// The payment slot of an order.
///
/// On the wire the slot is two sibling keys of the enclosing order,
/// `payment_details` and `nocharge_amount`; see [`slot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOrNoCharge {
    Payment(PaymentDetails),
    NoCharge(NoChargeDetails),
}

impl Validate for PaymentOrNoCharge {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        match self {
            Self::Payment(details) => validation::nested("Payment Details", details, strictness),
            Self::NoCharge(details) => {
                validation::nested("No Charge Details", details, strictness)
            }
        }
    }
}

impl Meaningful for PaymentOrNoCharge {}

impl From<PaymentDetails> for PaymentOrNoCharge {
    fn from(details: PaymentDetails) -> Self {
        Self::Payment(details)
    }
}

impl From<NoChargeDetails> for PaymentOrNoCharge {
    fn from(details: NoChargeDetails) -> Self {
        Self::NoCharge(details)
    }
}

/// `(de)serialize_with` helpers for a flattened `Option<PaymentOrNoCharge>`.
///
/// A malformed `payment_details` or `nocharge_amount` is a decode error.
/// When both keys are present `payment_details` wins.
pub mod slot {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use tracing::warn;

    use super::{NoChargeDetails, PaymentDetails, PaymentOrNoCharge};

    #[derive(Deserialize)]
    struct RawSlot {
        #[serde(default)]
        payment_details: Option<PaymentDetails>,
        #[serde(default)]
        nocharge_amount: Option<NoChargeDetails>,
    }

    #[derive(Serialize)]
    struct SlotRef<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        payment_details: Option<&'a PaymentDetails>,
        #[serde(skip_serializing_if = "Option::is_none")]
        nocharge_amount: Option<&'a NoChargeDetails>,
    }

    /// Serialize the slot as at most one of its two keys.
    ///
    /// # Errors
    ///
    /// Propagates the serializer's error.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(
        payment: &Option<PaymentOrNoCharge>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let slot = match payment {
            Some(PaymentOrNoCharge::Payment(details)) => SlotRef {
                payment_details: Some(details),
                nocharge_amount: None,
            },
            Some(PaymentOrNoCharge::NoCharge(details)) => SlotRef {
                payment_details: None,
                nocharge_amount: Some(details),
            },
            None => SlotRef {
                payment_details: None,
                nocharge_amount: None,
            },
        };
        slot.serialize(serializer)
    }

    /// Deserialize the slot from its two keys.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if either key holds a malformed
    /// record.
    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<Option<PaymentOrNoCharge>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSlot::deserialize(deserializer)?;
        Ok(match (raw.payment_details, raw.nocharge_amount) {
            (Some(details), no_charge) => {
                if no_charge.is_some() {
                    warn!("both payment_details and nocharge_amount set; keeping payment_details");
                }
                Some(PaymentOrNoCharge::Payment(details))
            }
            (None, Some(details)) => Some(PaymentOrNoCharge::NoCharge(details)),
            (None, None) => None,
        })
    }
}

/// A chargeable payment method.
///
/// Decoded as a card whenever any card-only key is present, so a card
/// missing some of its fields still decodes as a card and fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaymentDetails {
    CreditCard(CreditCardPaymentDetails),
    Paypal(PaypalPaymentDetails),
}

/// Keys only a card payment carries.
const CARD_KEYS: [&str; 5] = [
    "credit_card_bin",
    "credit_card_company",
    "credit_card_number",
    "avs_result_code",
    "cvv_result_code",
];

impl<'de> Deserialize<'de> for PaymentDetails {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let is_card = value
            .as_object()
            .is_some_and(|fields| CARD_KEYS.iter().any(|key| fields.contains_key(*key)));
        if is_card {
            CreditCardPaymentDetails::deserialize(value)
                .map(Self::CreditCard)
                .map_err(de::Error::custom)
        } else {
            PaypalPaymentDetails::deserialize(value)
                .map(Self::Paypal)
                .map_err(de::Error::custom)
        }
    }
}

impl Validate for PaymentDetails {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        match self {
            Self::CreditCard(card) => card.validate(strictness),
            Self::Paypal(paypal) => paypal.validate(strictness),
        }
    }
}

impl From<CreditCardPaymentDetails> for PaymentDetails {
    fn from(card: CreditCardPaymentDetails) -> Self {
        Self::CreditCard(card)
    }
}

impl From<PaypalPaymentDetails> for PaymentDetails {
    fn from(paypal: PaypalPaymentDetails) -> Self {
        Self::Paypal(paypal)
    }
}

/// Card payment as reported by the gateway.
///
/// The card number is expected to be masked by the merchant
/// (e.g. `XXXX-XXXX-XXXX-4242`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardPaymentDetails {
    /// First six digits of the card number.
    #[serde(default)]
    pub credit_card_bin: String,
    #[serde(default)]
    pub credit_card_company: String,
    #[serde(default)]
    pub credit_card_number: String,
    /// Address verification result code.
    #[serde(default)]
    pub avs_result_code: String,
    /// Card verification value result code.
    #[serde(default)]
    pub cvv_result_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_id: Option<String>,
}

impl Validate for CreditCardPaymentDetails {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        if strictness.is_strict() {
            rules::valued_string(&self.avs_result_code, "AVS Result Code")?;
            rules::valued_string(&self.cvv_result_code, "CVV Result Code")?;
        }
        rules::valued_string(&self.credit_card_bin, "Credit Card Bin")?;
        rules::valued_string(&self.credit_card_company, "Credit Card Company")?;
        rules::valued_string(&self.credit_card_number, "Credit Card Number")
    }
}

static CREDIT_CARD_CONTRACT: RecordContract = RecordContract {
    record: "CreditCardPaymentDetails",
    fields: &[
        FieldContract::always("credit_card_bin", "credit_card_bin"),
        FieldContract::always("credit_card_company", "credit_card_company"),
        FieldContract::always("credit_card_number", "credit_card_number"),
        FieldContract::omittable("avs_result_code", "avs_result_code"),
        FieldContract::omittable("cvv_result_code", "cvv_result_code"),
        FieldContract::omittable("authorization_id", "authorization_id"),
    ],
};

impl WireContract for CreditCardPaymentDetails {
    fn contract() -> &'static RecordContract {
        &CREDIT_CARD_CONTRACT
    }
}

/// `PayPal` payment as reported by `PayPal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaypalPaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    /// `verified` / `unverified`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_address_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protection_eligibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_id: Option<String>,
}

impl Validate for PaypalPaymentDetails {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        if strictness.is_strict() {
            rules::required(self.payer_email.as_ref(), "Payer Email")?;
            rules::valued_string(
                self.payer_status.as_deref().unwrap_or_default(),
                "Payer Status",
            )?;
        }
        if let Some(email) = &self.payer_email {
            rules::email(email, "Payer Email")?;
        }
        Ok(())
    }
}

static PAYPAL_CONTRACT: RecordContract = RecordContract {
    record: "PaypalPaymentDetails",
    fields: &[
        FieldContract::omittable("payer_email", "payer_email"),
        FieldContract::omittable("payer_status", "payer_status"),
        FieldContract::omittable("payer_address_status", "payer_address_status"),
        FieldContract::omittable("protection_eligibility", "protection_eligibility"),
        FieldContract::omittable("payment_status", "payment_status"),
        FieldContract::omittable("pending_reason", "pending_reason"),
        FieldContract::omittable("authorization_id", "authorization_id"),
    ],
};

impl WireContract for PaypalPaymentDetails {
    fn contract() -> &'static RecordContract {
        &PAYPAL_CONTRACT
    }
}

/// Amount settled through non-chargeable means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoChargeDetails {
    #[serde(default)]
    pub refund_id: String,
    #[serde(rename = "refund_amount", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub currency: String,
    /// Why no chargeable payment was taken (e.g. `gift card`).
    #[serde(default)]
    pub reason: String,
}

impl Validate for NoChargeDetails {
    fn validate(&self, _strictness: Strictness) -> Result<(), ValidationError> {
        rules::valued_string(&self.refund_id, "Refund ID")?;
        rules::non_negative(self.amount, "Refund Amount")?;
        rules::currency_code(&self.currency, "Currency")?;
        rules::valued_string(&self.reason, "Reason")
    }
}

static NO_CHARGE_CONTRACT: RecordContract = RecordContract {
    record: "NoChargeDetails",
    fields: &[
        FieldContract::always("refund_id", "refund_id"),
        FieldContract::always("amount", "refund_amount"),
        FieldContract::always("currency", "currency"),
        FieldContract::always("reason", "reason"),
    ],
};

impl WireContract for NoChargeDetails {
    fn contract() -> &'static RecordContract {
        &NO_CHARGE_CONTRACT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::validation::FieldRule;

    fn card() -> CreditCardPaymentDetails {
        CreditCardPaymentDetails {
            credit_card_bin: "424242".to_owned(),
            credit_card_company: "Visa".to_owned(),
            credit_card_number: "XXXX-XXXX-XXXX-4242".to_owned(),
            ..CreditCardPaymentDetails::default()
        }
    }

    #[test]
    fn test_card_verification_codes_strict_only() {
        assert!(card().validate(Strictness::Weak).is_ok());
        let err = card().validate(Strictness::Strict).unwrap_err();
        assert_eq!(err.field(), "AVS Result Code");
    }

    #[test]
    fn test_slot_labels_nested_failure() {
        let slot = PaymentOrNoCharge::from(NoChargeDetails {
            refund_id: "r-1".to_owned(),
            amount: Decimal::TEN,
            currency: "usd".to_owned(),
            reason: "gift card".to_owned(),
        });
        let err = slot.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.path(), "No Charge Details.Currency");
        assert_eq!(err.rule(), FieldRule::CurrencyCode);
    }

    #[test]
    fn test_paypal_email_checked_when_present() {
        let paypal = PaypalPaymentDetails {
            payer_email: Some("payer-at-example".to_owned()),
            ..PaypalPaymentDetails::default()
        };
        let err = paypal.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.rule(), FieldRule::Email);

        let err = PaypalPaymentDetails::default()
            .validate(Strictness::Strict)
            .unwrap_err();
        assert_eq!(err.field(), "Payer Email");
    }

    #[test]
    fn test_untagged_payment_details() {
        let json = serde_json::json!({
            "credit_card_bin": "424242",
            "credit_card_company": "Visa",
            "credit_card_number": "XXXX-4242"
        });
        let parsed: PaymentDetails = serde_json::from_value(json).unwrap();
        assert!(matches!(parsed, PaymentDetails::CreditCard(_)));

        let json = serde_json::json!({ "payer_email": "p@example.com" });
        let parsed: PaymentDetails = serde_json::from_value(json).unwrap();
        assert!(matches!(parsed, PaymentDetails::Paypal(_)));
    }

    #[test]
    fn test_incomplete_card_decodes_as_card() {
        let json = serde_json::json!({
            "credit_card_bin": "424242",
            "credit_card_company": "Visa",
            "authorization_id": "auth-1"
        });
        let parsed: PaymentDetails = serde_json::from_value(json).unwrap();
        let PaymentDetails::CreditCard(card) = &parsed else {
            panic!("expected a card, got {parsed:?}");
        };
        assert_eq!(card.credit_card_number, "");

        let err = PaymentOrNoCharge::from(parsed)
            .validate(Strictness::Weak)
            .unwrap_err();
        assert_eq!(err.path(), "Payment Details.Credit Card Number");
        assert_eq!(err.rule(), FieldRule::Required);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(flatten, with = "slot")]
        payment: Option<PaymentOrNoCharge>,
    }

    #[test]
    fn test_slot_rejects_malformed_no_charge() {
        let json = serde_json::json!({
            "nocharge_amount": { "refund_id": "r", "currency": "USD", "reason": "gift" }
        });
        let err = serde_json::from_value::<Holder>(json).unwrap_err();
        assert!(err.to_string().contains("refund_amount"), "{err}");
    }

    #[test]
    fn test_slot_prefers_payment_details() {
        let json = serde_json::json!({
            "payment_details": { "payer_email": "p@example.com" },
            "nocharge_amount": {
                "refund_id": "r", "refund_amount": 1.0, "currency": "USD", "reason": "gift"
            }
        });
        let holder: Holder = serde_json::from_value(json).unwrap();
        assert!(matches!(holder.payment, Some(PaymentOrNoCharge::Payment(_))));
    }

    #[test]
    fn test_slot_absent_and_serialized() {
        let holder: Holder = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(holder.payment, None);
        assert_eq!(serde_json::to_value(&holder).unwrap(), serde_json::json!({}));

        let holder = Holder {
            payment: Some(PaymentOrNoCharge::from(PaymentDetails::from(card()))),
        };
        let json = serde_json::to_value(&holder).unwrap();
        assert!(json.get("payment_details").is_some());
        assert!(json.get("nocharge_amount").is_none());
    }
}
