use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{Currencies, ReferenceDataError, Units};

/// Environment variable pointing at a replacement reference table.
pub const REFERENCE_DATA_ENV: &str = "MARKETKIT_REFERENCE_DATA";

const EMBEDDED_TABLE: &str = include_str!("currencies.yml");

static SHARED: OnceLock<Result<Provider, ReferenceDataError>> = OnceLock::new();

/// Where the reference table is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferenceSource {
    /// The table bundled into the binary.
    #[default]
    Embedded,
    File(PathBuf),
}

impl ReferenceSource {
    /// Reads [`REFERENCE_DATA_ENV`]; unset or empty selects the embedded table.
    pub fn from_env() -> Self {
        Self::from_var(std::env::var_os(REFERENCE_DATA_ENV))
    }

    fn from_var(value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Embedded,
        }
    }
}

/// Complete currency and unit reference data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub currencies: Currencies,
    pub units: Units,
}

impl Provider {
    pub fn embedded() -> Result<Self, ReferenceDataError> {
        Self::from_yaml_str(EMBEDDED_TABLE)
    }

    pub fn from_yaml_str(document: &str) -> Result<Self, ReferenceDataError> {
        let provider: Self = serde_yaml::from_str(document)?;
        tracing::info!(
            currencies = provider.currencies.len(),
            units = provider.units.len(),
            "reference data loaded"
        );
        Ok(provider)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|err| ReferenceDataError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_yaml_str(&document)
    }

    pub fn load(source: &ReferenceSource) -> Result<Self, ReferenceDataError> {
        match source {
            ReferenceSource::Embedded => Self::embedded(),
            ReferenceSource::File(path) => Self::from_path(path),
        }
    }

    /// Process-wide table, loaded on first use from [`ReferenceSource::from_env`].
    ///
    /// A load failure is cached and returned to every caller.
    pub fn shared() -> Result<&'static Self, ReferenceDataError> {
        SHARED
            .get_or_init(|| Self::load(&ReferenceSource::from_env()))
            .as_ref()
            .map_err(Clone::clone)
    }
}
