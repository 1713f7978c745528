//! # Tolerant Decoders
//!
//! Turn loosely typed exchange payloads into strict records.
//!
//! | Type | Accepts |
//! |------|---------|
//! | [`LenientDateTime`] | quoted `YYYY-MM-DD HH:MM:SS`, optional fractional seconds |
//! | [`LenientUuid`] | quoted hyphenated, simple, braced or URN UUID |
//! | [`Payload`] / [`FromPayload`] | JSON objects with string-encoded numbers, UUIDs and dates |
//!
//! Raw wrapper input shorter than [`MIN_QUOTED_LEN`] bytes decodes to an
//! unset value without an error.

mod datetime;
mod identifier;
mod payload;

pub use datetime::LenientDateTime;
pub use identifier::LenientUuid;
pub use payload::{decode_record, FromPayload, Payload};

/// Shortest raw input, quotes included, that the wrapper decoders try to parse.
pub const MIN_QUOTED_LEN: usize = 7;
