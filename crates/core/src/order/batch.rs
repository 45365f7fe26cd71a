//! Batch envelope for submitting several records at once.

use serde::Serialize;
use tracing::debug;

use super::OrderVariant;
use crate::validation::{self, Strictness, Validate, ValidationError};

/// Records sent together as `{"orders": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderBatch {
    pub orders: Vec<OrderVariant>,
}

impl OrderBatch {
    #[must_use]
    pub const fn new(orders: Vec<OrderVariant>) -> Self {
        Self { orders }
    }

    pub fn push(&mut self, order: impl Into<OrderVariant>) {
        self.orders.push(order.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl FromIterator<OrderVariant> for OrderBatch {
    fn from_iter<I: IntoIterator<Item = OrderVariant>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Every record must pass; the first failure is labelled `Orders[i]`.
impl Validate for OrderBatch {
    fn validate(&self, strictness: Strictness) -> Result<(), ValidationError> {
        debug!(count = self.orders.len(), %strictness, "validating batch");
        validation::each("Orders", &self.orders, strictness)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::order::{OrderCheckoutUpdate, OrderFulfillment};

    #[test]
    fn test_wire_envelope() {
        let mut batch = OrderBatch::default();
        batch.push(OrderCheckoutUpdate::new(1));
        batch.push(OrderFulfillment::new("2", Vec::new()));
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "orders": [{ "id": 1 }, { "id": "2", "fulfillments": [] }] })
        );
    }

    #[test]
    fn test_failure_is_labelled_with_index() {
        let batch: OrderBatch = [
            OrderCheckoutUpdate::new(1).into(),
            OrderCheckoutUpdate::default().into(),
        ]
        .into_iter()
        .collect();
        assert_eq!(batch.len(), 2);
        let err = batch.validate(Strictness::Weak).unwrap_err();
        assert_eq!(err.path(), "Orders[1].Merchant Order ID");
    }
}
