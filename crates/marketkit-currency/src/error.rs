use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the currency/unit reference table.
///
/// Loading never yields a partial table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceDataError {
    #[error("reference data is not valid YAML: {0}")]
    Parse(String),

    #[error("cannot read reference data from '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl From<serde_yaml::Error> for ReferenceDataError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
