//! Overlaying a checkout update onto a stored order.
//!
//! The merge is a field-by-field override: every field *present* on the
//! update (see [`presence`](crate::presence)) replaces the order's field
//! wholesale, composite fields included. Absent fields leave the order
//! untouched. The result is not validated; callers validate it afterwards.

use tracing::{debug, warn};

use crate::order::{OrderCheckoutUpdate, OrderCreate};
use crate::presence::{overlay, overlay_option};

/// Merge `update` into `order` and return the merged order.
///
/// Never fails. Applying the same update twice gives the same result as
/// applying it once, and an update with every field absent returns `order`
/// unchanged.
#[must_use]
pub fn merge(mut order: OrderCreate, update: OrderCheckoutUpdate) -> OrderCreate {
    order.import_checkout(update);
    order
}

impl OrderCreate {
    /// Overwrite this order's fields with every field present on `update`.
    ///
    /// The order identity is never overwritten.
    pub fn import_checkout(&mut self, update: OrderCheckoutUpdate) {
        // Destructured in full so a new checkout field cannot be forgotten here.
        let OrderCheckoutUpdate {
            id,
            email,
            customer,
            billing_address,
            shipping_address,
            line_items,
            shipping_lines,
            payment,
            gateway,
            browser_ip,
            currency,
            total_price,
            created_at,
            updated_at,
            discount_codes,
            total_discounts,
            total_price_usd,
            cart_token,
            closed_at,
            financial_status,
            fulfillment_status,
            source,
            vendor_id,
            vendor_name,
            custom,
        } = update;

        if id.is_valued() && id != self.id {
            warn!(
                order_id = %self.id,
                checkout_id = %id,
                "checkout identity differs from order identity; keeping order identity"
            );
        }
        debug!(order_id = %self.id, "importing checkout update");

        overlay(&mut self.email, email);
        overlay_option(&mut self.customer, customer);
        overlay_option(&mut self.billing_address, billing_address);
        overlay_option(&mut self.shipping_address, shipping_address);
        overlay(&mut self.line_items, line_items);
        overlay(&mut self.shipping_lines, shipping_lines);
        overlay_option(&mut self.payment, payment);
        overlay(&mut self.gateway, gateway);
        overlay(&mut self.browser_ip, browser_ip);
        overlay(&mut self.currency, currency);
        overlay_option(&mut self.total_price, total_price);
        overlay(&mut self.created_at, created_at);
        overlay(&mut self.updated_at, updated_at);
        overlay_option(&mut self.discount_codes, discount_codes);
        overlay_option(&mut self.total_discounts, total_discounts);
        overlay_option(&mut self.total_price_usd, total_price_usd);
        overlay_option(&mut self.cart_token, cart_token);
        overlay_option(&mut self.closed_at, closed_at);
        overlay_option(&mut self.financial_status, financial_status);
        overlay_option(&mut self.fulfillment_status, fulfillment_status);
        overlay_option(&mut self.source, source);
        overlay_option(&mut self.vendor_id, vendor_id);
        overlay_option(&mut self.vendor_name, vendor_name);
        overlay_option(&mut self.custom, custom);
    }
}
