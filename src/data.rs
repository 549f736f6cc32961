//! Provider seams for external data collaborators
//!
//! Scraping, price retrieval and performance statistics live outside the
//! core; whatever concurrency or retry logic they use, they must present
//! the pipeline with a simple synchronous view: value present, or value
//! absent for this ticker. [`MarketData`] is the in-memory
//! implementation used by the engine and the tests.

use std::collections::BTreeMap;

use crate::types::{PerfStats, Price, Symbol, TickerInfo};

/// Ticker identity lookup (display name, AUM, rank, inception)
pub trait IdentityProvider: Sync {
    fn info(&self, ticker: &str) -> Option<&TickerInfo>;

    /// Display name, falling back to the ticker itself when the
    /// collaborator has nothing.
    fn display_name(&self, ticker: &str) -> String {
        self.info(ticker)
            .and_then(|i| i.name.clone())
            .unwrap_or_else(|| ticker.to_string())
    }
}

/// Ascending, deduplicated closing-price history per ticker
pub trait PriceProvider: Sync {
    fn closes(&self, ticker: &str) -> Option<&[Price]>;
}

/// Externally computed performance ratios per ticker
pub trait PerfStatsProvider: Sync {
    fn stats(&self, ticker: &str) -> Option<&PerfStats>;
}

/// Annual expense ratios per ticker, decimal form (0.0003 = 0.03%)
pub trait ExpenseRatioProvider: Sync {
    fn expense_ratio(&self, ticker: &str) -> Option<f64>;
}

/// In-memory snapshot implementing all provider traits.
#[derive(Debug, Clone, Default)]
pub struct MarketData {
    info: BTreeMap<Symbol, TickerInfo>,
    closes: BTreeMap<Symbol, Vec<Price>>,
    perf: BTreeMap<Symbol, PerfStats>,
    expense_ratios: BTreeMap<Symbol, f64>,
}

impl MarketData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_info(&mut self, ticker: &str, info: TickerInfo) {
        self.info.insert(ticker.to_string(), info);
    }

    pub fn add_closes(&mut self, ticker: &str, closes: Vec<Price>) {
        self.closes.insert(ticker.to_string(), closes);
    }

    pub fn add_stats(&mut self, ticker: &str, stats: PerfStats) {
        self.perf.insert(ticker.to_string(), stats);
    }

    pub fn add_expense_ratio(&mut self, ticker: &str, ratio: f64) {
        self.expense_ratios.insert(ticker.to_string(), ratio);
    }
}

impl IdentityProvider for MarketData {
    fn info(&self, ticker: &str) -> Option<&TickerInfo> {
        self.info.get(ticker)
    }
}

impl PriceProvider for MarketData {
    fn closes(&self, ticker: &str) -> Option<&[Price]> {
        self.closes.get(ticker).map(|v| v.as_slice())
    }
}

impl PerfStatsProvider for MarketData {
    fn stats(&self, ticker: &str) -> Option<&PerfStats> {
        self.perf.get(ticker)
    }
}

impl ExpenseRatioProvider for MarketData {
    fn expense_ratio(&self, ticker: &str) -> Option<f64> {
        self.expense_ratios.get(ticker).copied()
    }
}
