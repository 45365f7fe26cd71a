//! Validation error taxonomy.

use core::fmt;

/// The rule a field violated.
///
/// Carried on every [`ValidationError`] so callers can build user-facing
/// messages without parsing the display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRule {
    /// Value must be set (non-null, non-blank).
    Required,
    /// One member of a mutually exclusive pair must be set.
    OneOf,
    /// Value must be a `local@domain` address with a dotted domain.
    Email,
    /// Value must be an IPv4 or IPv6 literal.
    IpAddress,
    /// Value must be three uppercase letters.
    CurrencyCode,
    /// Value must be `>= 0`.
    NonNegative,
    /// Value must be `> 0`.
    Positive,
    /// Timestamp must not be the unset sentinel.
    DateNotDefault,
}

impl fmt::Display for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Required => "must be specified",
            Self::OneOf => "one of the pair must be specified",
            Self::Email => "must be a valid email address",
            Self::IpAddress => "must be a valid IPv4 or IPv6 address",
            Self::CurrencyCode => "must be a three letter ISO 4217 currency code",
            Self::NonNegative => "must be zero or positive",
            Self::Positive => "must be positive",
            Self::DateNotDefault => "must be set to a real date",
        };
        f.write_str(s)
    }
}

/// A record failed validation.
///
/// Validation is fail-fast: the first violation found is returned and the
/// rest of the record is not inspected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A mandatory field is absent or blank.
    #[error("{field} is missing")]
    MissingRequiredField {
        /// Label of the missing field.
        field: String,
    },

    /// A present field fails its scalar rule.
    #[error("{field} has a bad format: {rule}")]
    FieldFormat {
        /// Label of the offending field.
        field: String,
        /// The violated rule.
        rule: FieldRule,
    },

    /// Neither member of a mutually exclusive pair is present.
    #[error("both {first} and {second} are missing - at least one should be specified")]
    MissingExclusiveField {
        /// Label of the first candidate.
        first: String,
        /// Label of the second candidate.
        second: String,
    },

    /// An owned sub-record failed.
    #[error("{record}: {source}")]
    Nested {
        /// Label of the sub-record, with an index for collection elements.
        record: String,
        /// The sub-record's own failure.
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    pub(crate) fn missing(field: &str) -> Self {
        Self::MissingRequiredField {
            field: field.to_owned(),
        }
    }

    pub(crate) fn format(field: &str, rule: FieldRule) -> Self {
        Self::FieldFormat {
            field: field.to_owned(),
            rule,
        }
    }

    pub(crate) fn exclusive(first: &str, second: &str) -> Self {
        Self::MissingExclusiveField {
            first: first.to_owned(),
            second: second.to_owned(),
        }
    }

    pub(crate) fn nested(record: &str, source: Self) -> Self {
        Self::Nested {
            record: record.to_owned(),
            source: Box::new(source),
        }
    }

    /// Label of the innermost offending field.
    ///
    /// For [`MissingExclusiveField`](Self::MissingExclusiveField) this is the
    /// first candidate.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field } | Self::FieldFormat { field, .. } => field,
            Self::MissingExclusiveField { first, .. } => first,
            Self::Nested { source, .. } => source.field(),
        }
    }

    /// The violated rule of the innermost failure.
    #[must_use]
    pub fn rule(&self) -> FieldRule {
        match self {
            Self::MissingRequiredField { .. } => FieldRule::Required,
            Self::FieldFormat { rule, .. } => *rule,
            Self::MissingExclusiveField { .. } => FieldRule::OneOf,
            Self::Nested { source, .. } => source.rule(),
        }
    }

    /// Innermost failure, with every `Nested` layer peeled off.
    #[must_use]
    pub fn innermost(&self) -> &Self {
        match self {
            Self::Nested { source, .. } => source.innermost(),
            other => other,
        }
    }

    /// Dotted path from the validated record down to the offending field,
    /// e.g. `Line Items[0].Price`.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Nested { record, source } => format!("{record}.{}", source.path()),
            other => other.field().to_owned(),
        }
    }
}
