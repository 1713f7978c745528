use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Classifies a symbol as fiat money or a cryptocurrency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    #[default]
    Fiat,
    Crypto,
}

impl SymbolType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fiat => "fiat",
            Self::Crypto => "crypto",
        }
    }
}

impl Display for SymbolType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A market symbol (e.g. BTC, USDT, EUR).
///
/// Symbols form a tree through `parent_id`, grouping derivatives and pegged
/// assets under their base asset:
///
/// ```text
/// USD  (id:1,  parent:0, fiat)
/// ├── USDT   (id:2,  parent:1,  crypto)
/// ├── USDC   (id:3,  parent:1,  crypto)
/// ├── EUR    (id:4,  parent:1,  fiat)
/// └── GBP    (id:5,  parent:1,  fiat)
/// BTC  (id:14, parent:0, crypto)
/// ├── BTCFT  (id:22, parent:14, crypto)
/// └── BTCM24 (id:23, parent:14, crypto)
/// ```
///
/// The tree is a relation over a flat table; records never hold references to
/// each other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub id: u64,
    #[serde(rename = "type")]
    pub symbol_type: SymbolType,
    /// Parent symbol id, 0 for a top-level asset.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub parent_id: u64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

impl Symbol {
    pub fn new(
        id: u64,
        symbol_type: SymbolType,
        parent_id: u64,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            symbol_type,
            parent_id,
            code: code.into(),
            name: name.into(),
            description: None,
            website: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }

    pub fn is_fiat(&self) -> bool {
        self.symbol_type == SymbolType::Fiat
    }

    pub fn is_crypto(&self) -> bool {
        self.symbol_type == SymbolType::Crypto
    }
}

/// Ordered symbol table with hierarchy lookups.
///
/// Lookups scan linearly and the first match wins; duplicate codes or ids are
/// kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbols(Vec<Symbol>);

impl Symbols {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_by_code(&self, code: &str) -> Option<&Symbol> {
        self.0.iter().find(|symbol| symbol.code == code)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Symbol> {
        self.0.iter().find(|symbol| symbol.id == id)
    }

    /// All symbols whose parent is `parent_id`, in table order.
    pub fn children(&self, parent_id: u64) -> Symbols {
        self.filtered(|symbol| symbol.parent_id == parent_id)
    }

    pub fn roots(&self) -> Symbols {
        self.children(0)
    }

    pub fn fiats(&self) -> Symbols {
        self.filtered(Symbol::is_fiat)
    }

    pub fn cryptos(&self) -> Symbols {
        self.filtered(Symbol::is_crypto)
    }

    pub fn parent_of(&self, symbol: &Symbol) -> Option<&Symbol> {
        if symbol.is_root() {
            return None;
        }
        self.get_by_id(symbol.parent_id)
    }

    /// Top-level ancestor of `symbol`; a root resolves to itself.
    ///
    /// Gives up after `len()` hops, so a dangling parent id or a cycle yields `None`.
    pub fn root_of<'a>(&'a self, symbol: &'a Symbol) -> Option<&'a Symbol> {
        let mut current = symbol;
        for _ in 0..=self.len() {
            if current.is_root() {
                return Some(current);
            }
            match self.get_by_id(current.parent_id) {
                Some(parent) => current = parent,
                None => {
                    tracing::warn!(
                        code = %current.code,
                        parent_id = current.parent_id,
                        "symbol parent is missing from the table"
                    );
                    return None;
                }
            }
        }
        tracing::warn!(code = %symbol.code, "symbol parent chain does not terminate");
        None
    }

    fn filtered(&self, predicate: impl Fn(&Symbol) -> bool) -> Symbols {
        Self(
            self.0
                .iter()
                .filter(|&symbol| predicate(symbol))
                .cloned()
                .collect(),
        )
    }
}

impl From<Vec<Symbol>> for Symbols {
    fn from(value: Vec<Symbol>) -> Self {
        Self(value)
    }
}

impl FromIterator<Symbol> for Symbols {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Symbols {
    type Item = Symbol;
    type IntoIter = std::vec::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Symbols {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_symbols() -> Symbols {
        Symbols::new(vec![
            Symbol::new(1, SymbolType::Fiat, 0, "USD", "US Dollar"),
            Symbol::new(2, SymbolType::Crypto, 1, "USDT", "Tether"),
            Symbol::new(3, SymbolType::Crypto, 1, "USDC", "USD Coin"),
            Symbol::new(4, SymbolType::Fiat, 1, "EUR", "Euro"),
            Symbol::new(5, SymbolType::Fiat, 1, "GBP", "British Pound"),
            Symbol::new(14, SymbolType::Crypto, 0, "BTC", "Bitcoin")
                .with_website("https://bitcoin.org"),
            Symbol::new(22, SymbolType::Crypto, 14, "BTCFT", "BTC Futures Token"),
            Symbol::new(23, SymbolType::Crypto, 14, "BTCM24", "BTC June 2024 Future"),
        ])
    }

    fn codes(symbols: &Symbols) -> Vec<&str> {
        symbols.iter().map(|symbol| symbol.code.as_str()).collect()
    }

    #[test]
    fn renders_symbol_type() {
        assert_eq!(SymbolType::Fiat.to_string(), "fiat");
        assert_eq!(SymbolType::Crypto.to_string(), "crypto");
    }

    #[test]
    fn classifies_roots_and_kinds() {
        let symbols = sample_symbols();
        let usd = symbols.get_by_code("USD").expect("USD");
        assert!(usd.is_root());
        assert!(usd.is_fiat() && !usd.is_crypto());

        let usdt = symbols.get_by_code("USDT").expect("USDT");
        assert!(!usdt.is_root());
        assert!(usdt.is_crypto());
    }

    #[test]
    fn looks_up_by_code_and_id() {
        let symbols = sample_symbols();
        assert_eq!(symbols.get_by_code("BTC").map(|s| s.name.as_str()), Some("Bitcoin"));
        assert!(symbols.get_by_code("btc").is_none());
        assert!(symbols.get_by_code("NONEXISTENT").is_none());
        assert_eq!(symbols.get_by_id(14).map(|s| s.code.as_str()), Some("BTC"));
        assert!(symbols.get_by_id(999).is_none());
        assert!(Symbols::default().get_by_code("BTC").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let symbols = Symbols::new(vec![
            Symbol::new(7, SymbolType::Crypto, 0, "DUP", "first"),
            Symbol::new(7, SymbolType::Fiat, 0, "DUP", "second"),
        ]);
        assert_eq!(symbols.get_by_code("DUP").map(|s| s.name.as_str()), Some("first"));
        assert_eq!(symbols.get_by_id(7).map(|s| s.name.as_str()), Some("first"));
    }

    #[test]
    fn lists_children_in_table_order() {
        let symbols = sample_symbols();
        assert_eq!(codes(&symbols.children(1)), ["USDT", "USDC", "EUR", "GBP"]);
        assert_eq!(codes(&symbols.children(14)), ["BTCFT", "BTCM24"]);
        assert!(symbols.children(22).is_empty());
        assert_eq!(codes(&symbols.roots()), ["USD", "BTC"]);
    }

    #[test]
    fn filters_by_kind() {
        let symbols = sample_symbols();
        assert_eq!(codes(&symbols.fiats()), ["USD", "EUR", "GBP"]);
        assert_eq!(symbols.cryptos().len(), 5);
    }

    #[test]
    fn resolves_parent_and_root() {
        let symbols = sample_symbols();
        let future = symbols.get_by_code("BTCM24").expect("BTCM24");
        assert_eq!(symbols.parent_of(future).map(|s| s.code.as_str()), Some("BTC"));
        assert_eq!(symbols.root_of(future).map(|s| s.code.as_str()), Some("BTC"));

        let btc = symbols.get_by_code("BTC").expect("BTC");
        assert!(symbols.parent_of(btc).is_none());
        assert_eq!(symbols.root_of(btc).map(|s| s.code.as_str()), Some("BTC"));
    }

    #[test]
    fn root_of_gives_up_on_cycles_and_dangling_links() {
        let cyclic = Symbols::new(vec![
            Symbol::new(1, SymbolType::Crypto, 2, "A", "a"),
            Symbol::new(2, SymbolType::Crypto, 1, "B", "b"),
        ]);
        let a = cyclic.get_by_code("A").expect("A");
        assert!(cyclic.root_of(a).is_none());

        let dangling = Symbols::new(vec![Symbol::new(1, SymbolType::Crypto, 42, "X", "x")]);
        let x = dangling.get_by_code("X").expect("X");
        assert!(dangling.root_of(x).is_none());
    }

    #[test]
    fn root_of_walks_from_the_given_duplicate() {
        let symbols = Symbols::new(vec![
            Symbol::new(1, SymbolType::Fiat, 0, "USD", "US Dollar"),
            Symbol::new(14, SymbolType::Crypto, 0, "BTC", "Bitcoin"),
            Symbol::new(5, SymbolType::Crypto, 1, "DUP", "pegged to USD"),
            Symbol::new(5, SymbolType::Crypto, 14, "DUP", "listed under BTC"),
        ]);
        let second = &symbols.as_slice()[3];

        assert_eq!(symbols.root_of(second).map(|s| s.code.as_str()), Some("BTC"));
    }

    #[test]
    fn serializes_camel_case_and_omits_defaults() {
        let btc = Symbol::new(14, SymbolType::Crypto, 0, "BTC", "Bitcoin")
            .with_website("https://bitcoin.org");
        let json = serde_json::to_value(&btc).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 14,
                "type": "crypto",
                "code": "BTC",
                "name": "Bitcoin",
                "website": "https://bitcoin.org"
            })
        );

        let parsed: Symbol = serde_json::from_value(json).expect("deserialize");
        assert_eq!(parsed, btc);
    }

    fn arb_symbols() -> impl Strategy<Value = Symbols> {
        prop::collection::vec((1u64..20, any::<bool>(), 0u64..6), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (id, crypto, parent_id))| {
                    let symbol_type = if crypto {
                        SymbolType::Crypto
                    } else {
                        SymbolType::Fiat
                    };
                    Symbol::new(id, symbol_type, parent_id, format!("S{index}"), "")
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn children_is_the_ordered_parent_subsequence(symbols in arb_symbols(), parent in 0u64..6) {
            let expected: Vec<Symbol> = symbols
                .iter()
                .filter(|symbol| symbol.parent_id == parent)
                .cloned()
                .collect();
            let children = symbols.children(parent);
            prop_assert_eq!(children.as_slice(), expected.as_slice());
        }

        #[test]
        fn roots_match_children_of_zero(symbols in arb_symbols()) {
            prop_assert_eq!(symbols.roots(), symbols.children(0));
        }

        #[test]
        fn fiats_and_cryptos_partition_the_table(symbols in arb_symbols()) {
            let fiats = symbols.fiats();
            let cryptos = symbols.cryptos();
            prop_assert!(fiats.iter().all(Symbol::is_fiat));
            prop_assert!(cryptos.iter().all(Symbol::is_crypto));
            prop_assert_eq!(fiats.len() + cryptos.len(), symbols.len());
        }
    }
}
