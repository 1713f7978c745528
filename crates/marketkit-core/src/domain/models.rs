use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{CoreError, UtcDateTime, ValidationError};

/// OHLC candle with market microstructure extras.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Candle {
    #[serde(skip_serializing_if = "is_false")]
    pub empty: bool,

    pub time_open: UtcDateTime,
    pub time_close: UtcDateTime,

    #[serde(skip_serializing_if = "is_zero")]
    pub open: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub high: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub low: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub close: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub ask: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub bid: f64,

    #[serde(skip_serializing_if = "is_zero")]
    pub trades_count: f64,
    /// Clusters keyed by the price level they describe.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub price_clusters: BTreeMap<String, PriceClusters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_levels: Option<CandleDeltaLevels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_levels: Option<CandleDeltaLevels>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub price_snake: Vec<f64>,
}

impl Candle {
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }

    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn duration(&self) -> Duration {
        self.time_close - self.time_open
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_finite("open", self.open)?;
        validate_finite("high", self.high)?;
        validate_finite("low", self.low)?;
        validate_finite("close", self.close)?;
        validate_finite("ask", self.ask)?;
        validate_finite("bid", self.bid)?;
        validate_finite("trades_count", self.trades_count)?;
        for clusters in self.price_clusters.values() {
            clusters.validate()?;
        }
        for level in [&self.delta_levels, &self.volume_levels].into_iter().flatten() {
            level.validate()?;
        }
        if self.price_snake.iter().any(|price| !price.is_finite()) {
            return Err(ValidationError::NonFiniteValue {
                field: "price_snake",
            });
        }
        Ok(())
    }
}

/// Volume and time distribution at one price level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceClusters {
    #[serde(skip_serializing_if = "is_zero")]
    pub ask: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub bid: f64,
    /// Milliseconds spent at this level.
    #[serde(rename = "durationMilli", skip_serializing_if = "is_zero")]
    pub duration: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub trades: f64,
}

impl PriceClusters {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_finite("ask", self.ask)?;
        validate_finite("bid", self.bid)?;
        validate_finite("duration", self.duration)?;
        validate_finite("trades", self.trades)
    }
}

/// Min/max delta values and the prices they occurred at.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CandleDeltaLevels {
    #[serde(skip_serializing_if = "is_zero")]
    pub min_delta_value: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub min_delta_price: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_delta_value: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub max_delta_price: f64,
}

impl CandleDeltaLevels {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_finite("min_delta_value", self.min_delta_value)?;
        validate_finite("min_delta_price", self.min_delta_price)?;
        validate_finite("max_delta_value", self.max_delta_value)?;
        validate_finite("max_delta_price", self.max_delta_price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AskBid {
    pub ask: i64,
    pub bid: i64,
}

/// Aggregated trade details at a price inside a candle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskBidPrice {
    pub price: f64,
    pub ask_bid: AskBid,
    /// Time between the first and last trade, in milliseconds.
    #[serde(rename = "duration")]
    pub duration_ms: i64,
    pub trades_count: i32,
}

/// Ask/bid counts with timing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Temperatures {
    pub ask_bid: AskBid,
    pub time_duration_ms: i64,
    pub trades_count: i64,
}

impl Temperatures {
    pub fn from_json(data: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec(self)?)
    }
}

pub(crate) fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_false(value: &bool) -> bool {
    !*value
}
