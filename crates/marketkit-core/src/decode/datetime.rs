use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decode::MIN_QUOTED_LEN;
use crate::{FormatError, UtcDateTime};

/// Exchange date-time field in the `YYYY-MM-DD HH:MM:SS` layout.
///
/// Holds a value only after a successful parse of a non-trivial input. Inputs
/// too short to carry a quoted timestamp decode to an empty wrapper without
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LenientDateTime(Option<UtcDateTime>);

impl LenientDateTime {
    /// Decode raw JSON bytes, quotes included.
    ///
    /// The first and last byte are stripped without checking that they are
    /// quote characters.
    pub fn from_json(raw: &[u8]) -> Result<Self, FormatError> {
        if raw.len() < MIN_QUOTED_LEN {
            tracing::debug!(len = raw.len(), "date-time input too short, leaving unset");
            return Ok(Self::default());
        }
        let text = String::from_utf8_lossy(&raw[1..raw.len() - 1]);
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
        UtcDateTime::parse_exchange(text)
            .map(|value| Self(Some(value)))
            .inspect_err(|err| tracing::debug!(%err, "rejected date-time"))
    }

    pub fn value(&self) -> Option<UtcDateTime> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_inner(self) -> Option<UtcDateTime> {
        self.0
    }
}

impl From<UtcDateTime> for LenientDateTime {
    fn from(value: UtcDateTime) -> Self {
        Self(Some(value))
    }
}

impl Display for LenientDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => f.write_str(&value.format_exchange()),
            None => Ok(()),
        }
    }
}

impl Serialize for LenientDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(value) => serializer.serialize_str(&value.format_exchange()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for LenientDateTime {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_exchange_timestamp() {
        let decoded = LenientDateTime::from_json(b"\"2025-06-15 14:30:00\"").expect("must decode");
        let value = decoded.value().expect("value present").into_inner();
        assert_eq!(value.year(), 2025);
        assert_eq!(u8::from(value.month()), 6);
        assert_eq!(value.day(), 15);
        assert_eq!((value.hour(), value.minute(), value.second()), (14, 30, 0));
    }

    #[test]
    fn empty_string_leaves_value_unset() {
        let decoded = LenientDateTime::from_json(b"\"\"").expect("no error");
        assert!(!decoded.is_set());
    }

    #[test]
    fn short_garbage_is_silently_ignored() {
        for raw in [&b"null"[..], b"\"abc\"", b"12", b""] {
            let decoded = LenientDateTime::from_json(raw).expect("no error");
            assert!(!decoded.is_set());
        }
    }

    #[test]
    fn length_threshold_is_seven_raw_bytes() {
        let six = LenientDateTime::from_json(b"\"abcd\"").expect("ignored");
        assert!(!six.is_set());

        let err = LenientDateTime::from_json(b"\"abcde\"").expect_err("parsed");
        assert_eq!(err.value(), "abcde");
    }

    #[test]
    fn text_threshold_is_five_characters() {
        let four = LenientDateTime::from_text("abcd").expect("ignored");
        assert!(!four.is_set());
        assert!(LenientDateTime::from_text("abcde").is_err());
    }

    #[test]
    fn accepts_fractional_seconds() {
        let decoded =
            LenientDateTime::from_json(b"\"2025-06-15 14:30:00.123\"").expect("must decode");
        let value = decoded.value().expect("value present").into_inner();
        assert_eq!(value.millisecond(), 123);
        assert_eq!(decoded.to_string(), "2025-06-15 14:30:00");
    }

    #[test]
    fn long_garbage_is_a_format_error() {
        let err = LenientDateTime::from_json(b"\"not a date\"").expect_err("must fail");
        assert!(matches!(err, FormatError::InvalidDateTime { .. }));
        assert_eq!(err.value(), "not a date");
    }

    #[test]
    fn iso_layout_is_rejected() {
        let err = LenientDateTime::from_json(b"\"2025-06-15T14:30:00Z\"").expect_err("must fail");
        assert_eq!(err.value(), "2025-06-15T14:30:00Z");
    }

    #[test]
    fn serde_applies_the_same_rules() {
        let set: LenientDateTime =
            serde_json::from_str("\"2025-06-15 14:30:00\"").expect("deserialize");
        assert!(set.is_set());
        assert_eq!(serde_json::to_string(&set).expect("serialize"), "\"2025-06-15 14:30:00\"");

        let unset: LenientDateTime = serde_json::from_str("null").expect("null");
        assert!(!unset.is_set());
        let unset: LenientDateTime = serde_json::from_str("\"\"").expect("empty");
        assert!(!unset.is_set());

        assert!(serde_json::from_str::<LenientDateTime>("\"yesterday\"").is_err());
    }
}
