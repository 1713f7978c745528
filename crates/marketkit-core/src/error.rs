use thiserror::Error;

/// Lexical errors raised while decoding exchange-sourced scalar fields.
///
/// Every variant carries the payload field name and the offending raw text.
/// Standalone wrapper decoders label the field [`STANDALONE_FIELD`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("field '{field}': invalid date-time '{value}'")]
    InvalidDateTime { field: String, value: String },
    #[error("field '{field}': invalid uuid '{value}'")]
    InvalidUuid { field: String, value: String },
    #[error("field '{field}': invalid base-10 integer '{value}'")]
    InvalidInteger { field: String, value: String },
    #[error("field '{field}': expected {expected}, found '{value}'")]
    UnexpectedType {
        field: String,
        expected: &'static str,
        value: String,
    },
}

/// Field label used when a wrapper is decoded outside of a record.
pub const STANDALONE_FIELD: &str = "value";

impl FormatError {
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidDateTime { field, .. }
            | Self::InvalidUuid { field, .. }
            | Self::InvalidInteger { field, .. }
            | Self::UnexpectedType { field, .. } => field,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::InvalidDateTime { value, .. }
            | Self::InvalidUuid { value, .. }
            | Self::InvalidInteger { value, .. }
            | Self::UnexpectedType { value, .. } => value,
        }
    }

    /// Relabel the error with the payload field it was raised for.
    pub fn with_field(mut self, name: &str) -> Self {
        match &mut self {
            Self::InvalidDateTime { field, .. }
            | Self::InvalidUuid { field, .. }
            | Self::InvalidInteger { field, .. }
            | Self::UnexpectedType { field, .. } => *field = name.to_owned(),
        }
        self
    }
}

/// Invariant violations on value records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
}

/// Top-level error type for record decoding.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
