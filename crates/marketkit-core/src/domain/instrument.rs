use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Broad instrument class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    #[default]
    Spot,
    Future,
    Option,
    Fx,
}

impl InstrumentType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Future => "future",
            Self::Option => "option",
            Self::Fx => "fx",
        }
    }
}

impl Display for InstrumentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tradable instrument (e.g. BTCUSDT, ES futures, EUR/USD).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: i64,
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
    pub ticker: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_feed_provider_id: Option<i64>,
}

/// Trading pair of a base and a quote symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub id: i64,
    /// Base symbol, e.g. BTC.
    pub from_symbol: String,
    /// Quote symbol, e.g. USDT.
    pub to_symbol: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Market {
    pub fn new(from_symbol: impl Into<String>, to_symbol: impl Into<String>) -> Self {
        Self {
            from_symbol: from_symbol.into(),
            to_symbol: to_symbol.into(),
            ..Self::default()
        }
    }
}

impl Display for Market {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from_symbol, self.to_symbol)
    }
}
