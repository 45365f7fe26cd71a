//! Sub-records owned by an order variant.
//!
//! Each sub-record validates independently and is owned by exactly one
//! enclosing record; nothing here refers back to its parent.

mod address;
mod chargeback;
mod custom;
mod customer;
mod discount_code;
mod fulfillment;
mod line_item;
mod payment;
mod policy;
mod shipping_line;

pub use address::AddressInformation;
pub use chargeback::{ChargebackDetails, DisputeDetails};
pub use custom::Custom;
pub use customer::Customer;
pub use discount_code::DiscountCode;
pub use fulfillment::FulfillmentDetails;
pub use line_item::LineItem;
pub use payment::slot as payment_slot;
pub use payment::{
    CreditCardPaymentDetails, NoChargeDetails, PaymentDetails, PaymentOrNoCharge,
    PaypalPaymentDetails,
};
pub use policy::{AuthenticationType, Policy, PolicyProtect, UseCase};
pub use shipping_line::ShippingLine;
