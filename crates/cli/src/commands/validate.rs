//! Validate a single record file.

use std::path::Path;

use orderguard_core::{RecordKind, Strictness, Validate};
use tracing::{info, warn};

/// Validate the record in `path` as `kind`.
///
/// After validation passes, the record is re-encoded and checked against its
/// wire contract so that any always-required key missing from the output is
/// reported.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the record is invalid.
pub fn run(
    path: &Path,
    kind: RecordKind,
    strictness: Strictness,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = super::load_record(path, kind)?;

    record.validate(strictness)?;

    let encoded = serde_json::to_value(&record)?;
    let missing = record.contract().missing_required(&encoded);
    if !missing.is_empty() {
        warn!(keys = ?missing, "Encoded record lacks always-required keys");
        return Err(format!("encoded record lacks required keys: {}", missing.join(", ")).into());
    }

    info!(id = %record.identity(), %kind, %strictness, "Record is valid");
    Ok(())
}
