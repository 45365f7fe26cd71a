//! Print the wire contract of a record kind.

use std::io::Write;

use orderguard_core::{RecordContract, RecordKind, Requiredness};

/// Write the wire table of `kind` to stdout, one field per line.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run(kind: RecordKind) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();
    out.write_all(render(kind.contract()).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn render(contract: &RecordContract) -> String {
    let width = contract
        .fields
        .iter()
        .map(|field| field.wire_name.len())
        .max()
        .unwrap_or(0);

    let mut table = format!("{}\n", contract.record);
    for field in contract.fields {
        let requiredness = match field.requiredness {
            Requiredness::Always => "always",
            Requiredness::Default => "omittable",
        };
        table.push_str(&format!(
            "  {:<width$}  {requiredness:<9}  {}\n",
            field.wire_name, field.field
        ));
    }
    table
}
