//! # Domain Models
//!
//! Exchange-agnostic market data records.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] / [`Symbols`] | Asset codes and their parent-pointer hierarchy |
//! | [`TimeAndSale`] | Single executed trade |
//! | [`OrderBookEntry`] | Top-of-book snapshot |
//! | [`Candle`] | OHLC candle with price clusters and delta levels |
//! | [`Order`] | Exchange order decoded from string-typed payloads |
//! | [`Instrument`] / [`Market`] | Tradable instruments and trading pairs |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Records are plain values. Derived figures (spread, range, duration) are
//! computed on read and never stored.

mod instrument;
mod models;
mod order;
mod symbol;
mod timestamp;
mod trade;

pub use instrument::{Instrument, InstrumentType, Market};
pub use models::{AskBid, AskBidPrice, Candle, CandleDeltaLevels, PriceClusters, Temperatures};
pub use order::Order;
pub use symbol::{Symbol, SymbolType, Symbols};
pub use timestamp::{UtcDateTime, EXCHANGE_FORMAT};
pub use trade::{
    AggressorSide, DataFeedProvider, Exchange, OrderBook, OrderBookEntry, Sale, TimeAndSale,
};
