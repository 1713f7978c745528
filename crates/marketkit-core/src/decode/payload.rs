use serde_json::{Map, Value};
use uuid::Uuid;

use crate::decode::identifier::parse_uuid;
use crate::{CoreError, FormatError, UtcDateTime};

/// Records that can be built from a loosely typed exchange payload.
///
/// Implementations pull each field through the [`Payload`] accessor that
/// carries its coercion rule. Any failing field aborts the whole record.
pub trait FromPayload: Sized {
    fn from_payload(payload: &Payload) -> Result<Self, FormatError>;
}

/// Decode a JSON object into `T`, coercing exchange-style string values.
pub fn decode_record<T: FromPayload>(data: &[u8]) -> Result<T, CoreError> {
    let payload = Payload::from_json(data)?;
    let record = T::from_payload(&payload).inspect_err(|err| {
        tracing::debug!(
            record = std::any::type_name::<T>(),
            field = err.field(),
            value = err.value(),
            "payload field rejected"
        )
    })?;
    Ok(record)
}

/// String-keyed view over a decoded JSON object.
///
/// Missing keys and `null` values decode to the field's default. Keys the
/// record does not ask for are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn from_json(data: &[u8]) -> Result<Self, CoreError> {
        Ok(Self(serde_json::from_slice(data)?))
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field).filter(|value| !value.is_null())
    }

    /// 64-bit integer; strings are parsed as base-10.
    pub fn i64(&self, field: &str) -> Result<i64, FormatError> {
        match self.get(field) {
            None => Ok(0),
            Some(Value::String(text)) => text.parse().map_err(|_| FormatError::InvalidInteger {
                field: field.to_owned(),
                value: text.clone(),
            }),
            Some(value) => value
                .as_i64()
                .ok_or_else(|| unexpected(field, "a 64-bit integer", value)),
        }
    }

    /// 8-bit unsigned code supplied as a JSON number, widened to 64 bits.
    pub fn u8_as_i64(&self, field: &str) -> Result<i64, FormatError> {
        match self.get(field) {
            None => Ok(0),
            Some(value) => value
                .as_u64()
                .and_then(|code| u8::try_from(code).ok())
                .map(i64::from)
                .ok_or_else(|| unexpected(field, "an 8-bit unsigned integer", value)),
        }
    }

    pub fn f64(&self, field: &str) -> Result<f64, FormatError> {
        match self.get(field) {
            None => Ok(0.0),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| unexpected(field, "a number", value)),
        }
    }

    pub fn string(&self, field: &str) -> Result<String, FormatError> {
        match self.get(field) {
            None => Ok(String::new()),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(value) => Err(unexpected(field, "a string", value)),
        }
    }

    /// UUID parsed from a string; missing fields decode to the nil UUID.
    pub fn uuid(&self, field: &str) -> Result<Uuid, FormatError> {
        match self.get(field) {
            None => Ok(Uuid::nil()),
            Some(Value::String(text)) => parse_uuid(text).map_err(|err| err.with_field(field)),
            Some(value) => Err(unexpected(field, "a uuid string", value)),
        }
    }

    /// Exchange-layout timestamp; an empty string means no value.
    pub fn timestamp(&self, field: &str) -> Result<Option<UtcDateTime>, FormatError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(text)) if text.is_empty() => Ok(None),
            Some(Value::String(text)) => UtcDateTime::parse_exchange(text)
                .map(Some)
                .map_err(|err| err.with_field(field)),
            Some(value) => Err(unexpected(field, "a date-time string", value)),
        }
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

fn unexpected(field: &str, expected: &'static str, value: &Value) -> FormatError {
    FormatError::UnexpectedType {
        field: field.to_owned(),
        expected,
        value: value.to_string(),
    }
}
