//! Orderguard Core - validation and merge engine for order events.
//!
//! This crate models the order lifecycle events a merchant submits for fraud
//! review (creation, checkout, fulfillment, chargeback) and decides whether a
//! populated record is well-formed enough to be encoded and sent.
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no persistence. Transport and encoding live with the caller, which
//! consumes the [`contract`] tables and the [`transaction`] outcome types.
//!
//! # Modules
//!
//! - [`types`] - Identity, email, currency and status value types
//! - [`validation`] - Field rules, strictness levels and the [`Validate`] trait
//! - [`records`] - Sub-records owned by an order (customer, addresses, items, ...)
//! - [`order`] - The closed set of order variants and their validation
//! - [`merge`] - Overlaying a checkout update onto a stored order
//! - [`presence`] - Uniform "is this field set" check used by the merge engine
//! - [`contract`] - Wire field names and requiredness per record type
//! - [`transaction`] - Outcome of submitting an order to the review service
//! - [`notification`] - Decision notifications pushed back by the review service

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod contract;
pub mod merge;
pub mod notification;
pub mod order;
pub mod presence;
pub mod records;
pub mod transaction;
pub mod types;
pub mod validation;

pub use contract::{FieldContract, RecordContract, Requiredness, WireContract};
pub use merge::merge;
pub use notification::DecisionNotification;
pub use order::{
    OrderBatch, OrderChargeback, OrderCheckoutUpdate, OrderCreate, OrderFulfillment, OrderVariant,
    RecordKind, RecordKindParseError,
};
pub use transaction::{OrderTransactionResult, TransactionResultError};
pub use types::*;
pub use validation::{FieldRule, Strictness, StrictnessParseError, Validate, ValidationError};
