//! # Marketkit Core
//!
//! Shared vocabulary for normalized market data.
//!
//! ## Overview
//!
//! Exchange connectors translate their wire formats into the records defined
//! here, and storage or analytics layers consume them without knowing which
//! venue produced them:
//!
//! ```text
//! Exchange A ──┐
//! Exchange B ──┼── connector ──▶ decode ──▶ TimeAndSale / Candle / Order ──▶ storage
//! Exchange C ──┘
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Records, symbol hierarchy and timestamps |
//! | [`decode`] | Tolerant decoders for string-typed exchange payloads |
//! | [`error`] | Format, validation and decode errors |
//!
//! ## Quick Start
//!
//! ```rust
//! use marketkit_core::{Order, Symbol, SymbolType, Symbols};
//!
//! let symbols = Symbols::new(vec![
//!     Symbol::new(14, SymbolType::Crypto, 0, "BTC", "Bitcoin"),
//!     Symbol::new(23, SymbolType::Crypto, 14, "BTCM24", "BTC June 2024 Future"),
//! ]);
//! assert_eq!(symbols.children(14).len(), 1);
//!
//! let order = Order::from_exchange_json(br#"{"customer_id": "41", "order_approved_at": ""}"#)?;
//! assert_eq!(order.customer_id, 41);
//! assert!(order.approved_at.is_none());
//! # Ok::<(), marketkit_core::CoreError>(())
//! ```
//!
//! ## Error Handling
//!
//! Decoding either yields a fully populated record or a single error naming
//! the offending field and raw value:
//!
//! ```rust
//! use marketkit_core::{CoreError, FormatError, Order};
//!
//! match Order::from_exchange_json(br#"{"customer_id": "invalid"}"#) {
//!     Err(CoreError::Format(FormatError::InvalidInteger { field, value })) => {
//!         assert_eq!((field.as_str(), value.as_str()), ("customer_id", "invalid"));
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod decode;
pub mod domain;
pub mod error;

pub use decode::{decode_record, FromPayload, LenientDateTime, LenientUuid, Payload};
pub use domain::{
    AggressorSide, AskBid, AskBidPrice, Candle, CandleDeltaLevels, DataFeedProvider, Exchange,
    Instrument, InstrumentType, Market, Order, OrderBook, OrderBookEntry, PriceClusters, Sale,
    Symbol, SymbolType, Symbols, Temperatures, TimeAndSale, UtcDateTime,
};
pub use error::{CoreError, FormatError, ValidationError};
