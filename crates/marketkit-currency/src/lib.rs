//! # Marketkit Currency
//!
//! Fiat, crypto and measurement-unit reference data, bundled as YAML and
//! parsed once into a read-only table.
//!
//! ```rust
//! use marketkit_currency::Provider;
//!
//! let provider = Provider::embedded()?;
//! let btc = provider.currencies.get("BTC").expect("bundled");
//! assert!(btc.is_crypto());
//! # Ok::<(), marketkit_currency::ReferenceDataError>(())
//! ```
//!
//! Set `MARKETKIT_REFERENCE_DATA` to a YAML file path to replace the bundled
//! table for [`Provider::shared`].

mod currency;
mod error;
mod provider;

pub use currency::{Currencies, Currency, Kind, Unit, Units};
pub use error::ReferenceDataError;
pub use provider::{Provider, ReferenceSource, REFERENCE_DATA_ENV};
