//! Subcommand implementations.
//!
//! Record files are read as JSON, or as YAML when the extension is `.yaml`
//! or `.yml`.

pub mod contract;
pub mod merge;
pub mod validate;

use std::path::{Path, PathBuf};

use orderguard_core::{OrderVariant, RecordKind};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading a record file.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Expected a {expected} record, got {actual}")]
    WrongKind {
        expected: RecordKind,
        actual: RecordKind,
    },
}

/// Encoding of a record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension, defaulting to JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read and decode a record file of the given kind.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode as `kind`.
pub fn load_record(path: &Path, kind: RecordKind) -> Result<OrderVariant, InputError> {
    info!(path = %path.display(), %kind, "Loading record");
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_record(&content, InputFormat::from_path(path), kind)
}

/// Decode record text of the given kind.
///
/// Keys outside the record's wire contract are logged and otherwise ignored.
///
/// # Errors
///
/// Returns an error if the text is malformed or does not match `kind`.
pub fn parse_record(
    content: &str,
    format: InputFormat,
    kind: RecordKind,
) -> Result<OrderVariant, InputError> {
    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
    };

    let unknown = kind.contract().unknown_keys(&value);
    if !unknown.is_empty() {
        warn!(%kind, keys = ?unknown, "Ignoring keys outside the wire contract");
    }

    Ok(OrderVariant::deserialize(kind, value)?)
}
