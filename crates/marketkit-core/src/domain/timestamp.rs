use std::fmt::{Display, Formatter};
use std::ops::Sub;

use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::STANDALONE_FIELD;
use crate::FormatError;

/// Fixed `YYYY-MM-DD HH:MM:SS` layout used by exchange REST payloads.
pub const EXCHANGE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Parsing counterpart of [`EXCHANGE_FORMAT`]; fractional seconds are optional.
const EXCHANGE_PARSE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// Years that both output layouts can render.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// Timestamp normalized to UTC, with a year in `0..=9999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    /// Parse an RFC3339 timestamp, converting any offset to UTC.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let value = OffsetDateTime::parse(input, &Rfc3339).map_err(|_| invalid(input))?;
        Self::from_offset_datetime(value).map_err(|_| invalid(input))
    }

    /// Parse the exchange `YYYY-MM-DD HH:MM:SS[.fff]` layout; the wall clock is taken as UTC.
    pub fn parse_exchange(input: &str) -> Result<Self, FormatError> {
        let value =
            PrimitiveDateTime::parse(input, EXCHANGE_PARSE_FORMAT).map_err(|_| invalid(input))?;
        Self::from_offset_datetime(value.assume_utc()).map_err(|_| invalid(input))
    }

    /// Convert to UTC; fails when the UTC year leaves `0..=9999`.
    pub fn from_offset_datetime(value: OffsetDateTime) -> Result<Self, FormatError> {
        let value = value
            .checked_to_offset(UtcOffset::UTC)
            .filter(|utc| (MIN_YEAR..=MAX_YEAR).contains(&utc.year()))
            .ok_or_else(|| invalid(&value.to_string()))?;
        Ok(Self(value))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .expect("UtcDateTime must be RFC3339 formattable")
    }

    pub fn format_exchange(self) -> String {
        self.0
            .format(EXCHANGE_FORMAT)
            .expect("UtcDateTime must be formattable in the exchange layout")
    }
}

fn invalid(input: &str) -> FormatError {
    FormatError::InvalidDateTime {
        field: STANDALONE_FIELD.to_owned(),
        value: input.to_owned(),
    }
}

impl Default for UtcDateTime {
    fn default() -> Self {
        Self(OffsetDateTime::UNIX_EPOCH)
    }
}

impl Sub for UtcDateTime {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl TryFrom<OffsetDateTime> for UtcDateTime {
    type Error = FormatError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        Self::from_offset_datetime(value)
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.0.format(&Rfc3339).map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value)
            .or_else(|_| Self::parse_exchange(&value))
            .map_err(D::Error::custom)
    }
}
