//! Pairwise return correlations
//!
//! Two symmetric tables exist per run: a longer-window monthly table and
//! a shorter-window daily table. The resolver prefers the monthly source
//! and returns `None` for "no data" - an unknown correlation is a
//! different thing from a true low or negative one, and the type keeps
//! the two apart.

use std::collections::{BTreeSet, HashMap};

use crate::types::Symbol;

/// Symmetric correlation table over a set of tickers.
///
/// NaN cells normalize to "absent" on insert; a symbol can be present in
/// the table while individual pairs are missing.
#[derive(Debug, Clone, Default)]
pub struct CorrelationTable {
    symbols: BTreeSet<Symbol>,
    cells: HashMap<(Symbol, Symbol), f64>,
}

impl CorrelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: &str, b: &str) -> (Symbol, Symbol) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// Register a symbol without any pairwise data.
    pub fn add_symbol(&mut self, symbol: &str) {
        self.symbols.insert(symbol.to_string());
    }

    /// Insert a symmetric cell. NaN values register the symbols but
    /// store nothing.
    pub fn insert(&mut self, a: &str, b: &str, r: f64) {
        self.symbols.insert(a.to_string());
        self.symbols.insert(b.to_string());
        if r.is_finite() {
            self.cells.insert(Self::key(a, b), r);
        }
    }

    /// Whether the symbol appears in this table at all.
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(symbol)
    }

    /// Pairwise correlation; the diagonal is always 1.0 for a known
    /// symbol.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        if !self.contains(a) || !self.contains(b) {
            return None;
        }
        if a == b {
            return Some(1.0);
        }
        self.cells.get(&Self::key(a, b)).copied()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Best-available pairwise correlation lookup: monthly table first, then
/// daily, then `None`. Pure function of the two tables, no state across
/// calls.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationResolver<'a> {
    monthly: &'a CorrelationTable,
    daily: &'a CorrelationTable,
}

impl<'a> CorrelationResolver<'a> {
    pub fn new(monthly: &'a CorrelationTable, daily: &'a CorrelationTable) -> Self {
        Self { monthly, daily }
    }

    /// Resolve the correlation between `ref_ticker` and `ticker`.
    ///
    /// The table where both symbols are present decides the source; a
    /// missing or NaN cell inside that source is "unknown", not zero.
    pub fn resolve(&self, ref_ticker: &str, ticker: &str) -> Option<f64> {
        if self.monthly.contains(ref_ticker) && self.monthly.contains(ticker) {
            self.monthly.get(ref_ticker, ticker)
        } else if self.daily.contains(ref_ticker) && self.daily.contains(ticker) {
            self.daily.get(ref_ticker, ticker)
        } else {
            None
        }
    }

    /// Whether the ticker has correlation data in either table.
    pub fn has_any(&self, ticker: &str) -> bool {
        self.monthly.contains(ticker) || self.daily.contains(ticker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table(pairs: &[(&str, &str, f64)]) -> CorrelationTable {
        let mut t = CorrelationTable::new();
        for (a, b, r) in pairs {
            t.insert(a, b, *r);
        }
        t
    }

    #[test]
    fn test_symmetric_lookup() {
        let t = table(&[("VOO", "SPY", 0.99)]);
        assert_relative_eq!(t.get("VOO", "SPY").unwrap(), 0.99);
        assert_relative_eq!(t.get("SPY", "VOO").unwrap(), 0.99);
    }

    #[test]
    fn test_diagonal_is_one() {
        let t = table(&[("VOO", "SPY", 0.99)]);
        assert_relative_eq!(t.get("VOO", "VOO").unwrap(), 1.0);
        assert!(t.get("QQQ", "QQQ").is_none());
    }

    #[test]
    fn test_nan_normalizes_to_absent() {
        let t = table(&[("VOO", "GLD", f64::NAN)]);
        assert!(t.contains("GLD"));
        assert!(t.get("VOO", "GLD").is_none());
    }

    #[test]
    fn test_resolver_prefers_monthly() {
        let monthly = table(&[("VOO", "XYZ", 0.80)]);
        let daily = table(&[("VOO", "XYZ", 0.20)]);
        let resolver = CorrelationResolver::new(&monthly, &daily);
        assert_relative_eq!(resolver.resolve("VOO", "XYZ").unwrap(), 0.80);
    }

    #[test]
    fn test_resolver_falls_back_to_daily() {
        let monthly = table(&[("VOO", "SPY", 0.99)]);
        let daily = table(&[("VOO", "XYZ", 0.20)]);
        let resolver = CorrelationResolver::new(&monthly, &daily);
        assert_relative_eq!(resolver.resolve("VOO", "XYZ").unwrap(), 0.20);
    }

    #[test]
    fn test_resolver_unknown_pair_is_none() {
        let monthly = table(&[("VOO", "SPY", 0.99)]);
        let daily = CorrelationTable::new();
        let resolver = CorrelationResolver::new(&monthly, &daily);
        assert!(resolver.resolve("VOO", "ZZUNKNOWN9").is_none());
        assert!(!resolver.has_any("ZZUNKNOWN9"));
        assert!(resolver.has_any("SPY"));
    }

    #[test]
    fn test_monthly_presence_pins_source() {
        // Both symbols live in the monthly table but the pair cell is
        // missing there; the resolver does not fall through to daily.
        let mut monthly = CorrelationTable::new();
        monthly.add_symbol("VOO");
        monthly.add_symbol("XYZ");
        let daily = table(&[("VOO", "XYZ", 0.90)]);
        let resolver = CorrelationResolver::new(&monthly, &daily);
        assert!(resolver.resolve("VOO", "XYZ").is_none());
    }
}
