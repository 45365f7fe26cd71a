//! Merge a checkout update into a stored order.

use std::io::Write;
use std::path::Path;

use orderguard_core::{OrderVariant, RecordKind, Strictness, Validate};
use tracing::info;

use super::InputError;

/// Merge the checkout in `checkout_path` into the order in `order_path`.
///
/// The checkout is checked structurally first. The merged order is validated
/// at `strictness` and written as pretty JSON to `output`, or stdout.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded, either record is
/// invalid, or the output cannot be written.
pub fn run(
    order_path: &Path,
    checkout_path: &Path,
    strictness: Strictness,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = match super::load_record(order_path, RecordKind::Create)? {
        OrderVariant::Create(order) => order,
        other => return Err(wrong_kind(RecordKind::Create, &other).into()),
    };
    let checkout = match super::load_record(checkout_path, RecordKind::Checkout)? {
        OrderVariant::Checkout(checkout) => checkout,
        other => return Err(wrong_kind(RecordKind::Checkout, &other).into()),
    };

    checkout.validate(strictness)?;

    let merged = orderguard_core::merge(order, checkout);
    merged.validate(strictness)?;
    info!(id = %merged.id, %strictness, "Merged order is valid");

    let json = serde_json::to_string_pretty(&merged)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!(path = %path.display(), "Wrote merged order");
        }
        None => writeln!(std::io::stdout().lock(), "{json}")?,
    }
    Ok(())
}

const fn wrong_kind(expected: RecordKind, record: &OrderVariant) -> InputError {
    InputError::WrongKind {
        expected,
        actual: record.kind(),
    }
}
