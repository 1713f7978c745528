use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Fiat or crypto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Fiat,
    Crypto,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fiat => "fiat",
            Self::Crypto => "crypto",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fiat currency or crypto token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    pub code: String,
    pub description: String,
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Currency {
    pub fn is_fiat(&self) -> bool {
        self.kind == Kind::Fiat
    }

    pub fn is_crypto(&self) -> bool {
        self.kind == Kind::Crypto
    }
}

/// Measurement unit (mass, volume, energy, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub unit_type: String,
}

/// Ordered currency list; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currencies(Vec<Currency>);

impl Currencies {
    pub fn new(currencies: Vec<Currency>) -> Self {
        Self(currencies)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Currency> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Currency by code, e.g. `BTC` or `USD`.
    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.0.iter().find(|currency| currency.code == code)
    }

    pub fn fiats(&self) -> Currencies {
        self.of_kind(Kind::Fiat)
    }

    pub fn cryptos(&self) -> Currencies {
        self.of_kind(Kind::Crypto)
    }

    fn of_kind(&self, kind: Kind) -> Currencies {
        Self(
            self.0
                .iter()
                .filter(|currency| currency.kind == kind)
                .cloned()
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Currencies {
    type Item = &'a Currency;
    type IntoIter = std::slice::Iter<'a, Currency>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Units(Vec<Unit>);

impl Units {
    pub fn new(units: Vec<Unit>) -> Self {
        Self(units)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.0.iter().find(|unit| unit.id == id)
    }

    /// Units of one measurement type, e.g. `mass`.
    pub fn of_type(&self, unit_type: &str) -> Units {
        Self(
            self.0
                .iter()
                .filter(|unit| unit.unit_type == unit_type)
                .cloned()
                .collect(),
        )
    }
}
