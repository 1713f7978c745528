use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::decode::MIN_QUOTED_LEN;
use crate::error::STANDALONE_FIELD;
use crate::FormatError;

/// UUID field decoded from a JSON string, tolerant of missing or short input.
///
/// Renders as the empty string when unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LenientUuid(Option<Uuid>);

impl LenientUuid {
    /// Decode raw JSON bytes, quotes included.
    pub fn from_json(raw: &[u8]) -> Result<Self, FormatError> {
        if raw.len() < MIN_QUOTED_LEN {
            tracing::debug!(len = raw.len(), "uuid input too short, leaving unset");
            return Ok(Self::default());
        }
        let text: String =
            serde_json::from_slice(raw).map_err(|_| FormatError::UnexpectedType {
                field: STANDALONE_FIELD.to_owned(),
                expected: "a JSON string",
                value: String::from_utf8_lossy(raw).into_owned(),
            })?;
        Self::parse(&text)
    }

    /// Decode an already unquoted string, applying the same length threshold.
    pub fn from_text(text: &str) -> Result<Self, FormatError> {
        if text.len() + 2 < MIN_QUOTED_LEN {
            return Ok(Self::default());
        }
        Self::parse(text)
    }

    fn parse(text: &str) -> Result<Self, FormatError> {
        parse_uuid(text)
            .map(|value| Self(Some(value)))
            .inspect_err(|err| tracing::debug!(%err, "rejected uuid"))
    }

    pub fn value(&self) -> Option<Uuid> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

/// Parse hyphenated, simple, braced or URN UUID text.
pub(crate) fn parse_uuid(text: &str) -> Result<Uuid, FormatError> {
    Uuid::parse_str(text).map_err(|_| FormatError::InvalidUuid {
        field: STANDALONE_FIELD.to_owned(),
        value: text.to_owned(),
    })
}

impl From<Uuid> for LenientUuid {
    fn from(value: Uuid) -> Self {
        Self(Some(value))
    }
}

impl Display for LenientUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value.hyphenated()),
            None => Ok(()),
        }
    }
}

impl Serialize for LenientUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LenientUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => Self::from_text(&text).map_err(D::Error::custom),
            None => Ok(Self::default()),
        }
    }
}
