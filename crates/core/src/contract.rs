//! Wire contract tables.
//!
//! Every record type publishes a static table mapping each of its fields to
//! the JSON key the review service expects and to whether the encoder must
//! refuse to send the record without it. The core never encodes anything
//! itself; an encoder uses these tables to check its output.

use serde_json::Value;

/// Whether a field must be present on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requiredness {
    /// The encoder must fail if the field is unset.
    Always,
    /// The field may be omitted when unset.
    Default,
}

/// One row of a [`RecordContract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldContract {
    /// Rust field name on the record.
    pub field: &'static str,
    /// JSON key on the wire.
    pub wire_name: &'static str,
    /// Whether the encoder must reject the record without it.
    pub requiredness: Requiredness,
}

impl FieldContract {
    /// A field the encoder must always emit.
    #[must_use]
    pub const fn always(field: &'static str, wire_name: &'static str) -> Self {
        Self {
            field,
            wire_name,
            requiredness: Requiredness::Always,
        }
    }

    /// A field that may be left off the wire when unset.
    #[must_use]
    pub const fn omittable(field: &'static str, wire_name: &'static str) -> Self {
        Self {
            field,
            wire_name,
            requiredness: Requiredness::Default,
        }
    }

    /// Returns `true` for [`Requiredness::Always`].
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.requiredness, Requiredness::Always)
    }
}

/// The wire table for one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordContract {
    /// Record name, for diagnostics.
    pub record: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldContract],
}

impl RecordContract {
    /// Look up the wire name of a Rust field.
    #[must_use]
    pub fn wire_name(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.wire_name)
    }

    /// Look up a row by its wire name.
    #[must_use]
    pub fn by_wire_name(&self, wire_name: &str) -> Option<&FieldContract> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    /// Rows the encoder must always emit.
    pub fn required(&self) -> impl Iterator<Item = &FieldContract> {
        self.fields.iter().filter(|f| f.is_required())
    }

    /// Wire names of `Always` fields that are absent or `null` in an encoded
    /// JSON object. A non-object value is missing every required field.
    #[must_use]
    pub fn missing_required(&self, encoded: &Value) -> Vec<&'static str> {
        self.required()
            .filter(|f| encoded.get(f.wire_name).is_none_or(Value::is_null))
            .map(|f| f.wire_name)
            .collect()
    }

    /// Keys of an encoded JSON object that the table does not know about.
    #[must_use]
    pub fn unknown_keys(&self, encoded: &Value) -> Vec<String> {
        encoded
            .as_object()
            .map(|object| {
                object
                    .keys()
                    .filter(|key| self.by_wire_name(key).is_none())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A record type with a wire table.
pub trait WireContract {
    /// The record's static wire table.
    fn contract() -> &'static RecordContract;
}
