use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::decode::{FromPayload, LenientUuid, Payload};
use crate::domain::models::validate_finite;
use crate::{FormatError, UtcDateTime, ValidationError};

/// Which side initiated a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggressorSide {
    #[default]
    None,
    Sell,
    Buy,
    Unknown,
}

impl AggressorSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sell => "sell",
            Self::Buy => "buy",
            Self::Unknown => "unknown",
        }
    }

    /// Wire code used by feeds that send the side as a small integer.
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Sell => 1,
            Self::Buy => 2,
            Self::Unknown => 3,
        }
    }

    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::None,
            1 => Self::Sell,
            2 => Self::Buy,
            _ => Self::Unknown,
        }
    }
}

impl Display for AggressorSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price, direction and size of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub price: f64,
    pub aggressor_side: AggressorSide,
    pub volume: i64,
}

impl Sale {
    pub fn new(
        price: f64,
        aggressor_side: AggressorSide,
        volume: i64,
    ) -> Result<Self, ValidationError> {
        validate_finite("price", price)?;
        Ok(Self {
            price,
            aggressor_side,
            volume,
        })
    }
}

/// A single trade captured from an exchange feed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAndSale {
    pub internal_id: LenientUuid,
    /// Exchange trade id.
    pub id: String,
    pub exchange_id: i64,
    pub data_feed_provider_id: i64,
    /// Orders trades sharing a timestamp.
    pub trade_sequence: i64,
    pub trade_open_interest: i64,
    /// Exchange ticker, e.g. `BTCUSDT`, `ES`, `NQ`.
    pub ticker: String,
    pub time: UtcDateTime,
    #[serde(flatten)]
    pub sale: Sale,
}

impl FromPayload for TimeAndSale {
    fn from_payload(payload: &Payload) -> Result<Self, FormatError> {
        let internal_id = match payload.string("internal_id")? {
            text if text.is_empty() => LenientUuid::default(),
            text => LenientUuid::from_text(&text).map_err(|err| err.with_field("internal_id"))?,
        };
        let time = payload
            .timestamp("time")?
            .ok_or_else(|| FormatError::InvalidDateTime {
                field: "time".to_owned(),
                value: String::new(),
            })?;

        Ok(Self {
            internal_id,
            id: payload.string("id")?,
            exchange_id: payload.i64("exchange_id")?,
            data_feed_provider_id: payload.i64("data_feed_provider_id")?,
            trade_sequence: payload.i64("trade_sequence")?,
            trade_open_interest: payload.i64("trade_open_interest")?,
            ticker: payload.string("ticker")?,
            time,
            sale: Sale {
                price: payload.f64("price")?,
                aggressor_side: AggressorSide::from_code(payload.u8_as_i64("aggressor_side")?),
                volume: payload.i64("volume")?,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DataFeedProvider {
    pub id: i64,
    pub name: String,
    pub urn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Exchange {
    pub id: i64,
    pub name: String,
}

/// Top-of-book snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookEntry {
    pub ticker: String,
    pub exchange_id: i64,
    pub time: UtcDateTime,
    pub best_bid: Sale,
    pub best_ask: Sale,
}

impl OrderBookEntry {
    pub fn spread(&self) -> f64 {
        self.best_ask.price - self.best_bid.price
    }
}

pub type OrderBook = Vec<OrderBookEntry>;
