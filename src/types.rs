//! Core types shared across the taxonomy engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticker symbol identifier
pub type Symbol = String;

/// Sector identifier ("S01" .. "S24")
pub type SectorId = String;

/// Price type (using f64 for precision)
pub type Price = f64;

/// Identity fields supplied by the scraping collaborator.
///
/// Every field is individually optional: the pipeline must tolerate
/// arbitrarily incomplete input without failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerInfo {
    /// Full fund name as listed
    pub name: Option<String>,
    /// Assets under management, USD
    pub market_cap: Option<f64>,
    /// AUM rank within the universe
    pub rank: Option<u32>,
    /// Listing date
    pub inception: Option<NaiveDate>,
}

impl TickerInfo {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Performance ratios computed by the external stats collaborator.
///
/// An exact 0.0 is the upstream "unset" sentinel and is excluded from
/// sector averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerfStats {
    /// Compound annual growth rate, percent
    pub cagr: f64,
    /// Annualized volatility, percent
    pub volatility: f64,
    /// Sortino ratio
    pub sortino: f64,
}

impl PerfStats {
    pub fn new(cagr: f64, volatility: f64, sortino: f64) -> Self {
        Self {
            cagr,
            volatility,
            sortino,
        }
    }
}

/// Round to a fixed number of decimal places for display fields.
pub(crate) fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
