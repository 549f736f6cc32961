//! Price-derived display indicators and the flat per-ticker record
//!
//! All indicator functions are pure transforms over an ascending,
//! deduplicated closing-price series with missing observations already
//! dropped at the provider boundary. Too little data degrades to a
//! neutral value (0.0) or to "unavailable" (`None`), never to an error:
//! one sparse ticker must not affect any other ticker's record.
//!
//! CAGR, annualized volatility and the Sortino ratio are supplied by an
//! external performance-stats collaborator and only merged here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution};

use crate::classify::{ClassificationMethod, ClassificationRecord};
use crate::correlation::CorrelationResolver;
use crate::data::{ExpenseRatioProvider, IdentityProvider, PerfStatsProvider, PriceProvider};
use crate::legacy::{LegacyAssessment, LegacyReason};
use crate::registry::Registry;
use crate::types::{round_dp, SectorId, Symbol};

/// Trailing window for the long moving average
pub const LONG_WINDOW: usize = 200;
/// Trailing observations approximating 52 weeks
pub const YEAR_WINDOW: usize = 252;
/// Minimum observations for the 52-week range metrics
pub const RANGE_MIN_OBS: usize = 10;
/// Default RSI period
pub const RSI_PERIOD: usize = 14;

fn tail(prices: &[f64], window: usize) -> &[f64] {
    &prices[prices.len().saturating_sub(window)..]
}

fn window_mean_std(window: &[f64]) -> (Option<f64>, Option<f64>) {
    let data = Data::new(window.to_vec());
    (data.mean(), data.std_dev())
}

/// Z-score of the last price against the trailing 200-period mean and
/// standard deviation. Fewer than 200 observations, or a zero/undefined
/// deviation, yields 0.0.
pub fn z_score(prices: &[f64]) -> f64 {
    if prices.len() < LONG_WINDOW {
        return 0.0;
    }
    let window = tail(prices, LONG_WINDOW);
    let (mean, std) = window_mean_std(window);
    let mean = match mean {
        Some(m) if m.is_finite() => m,
        _ => return 0.0,
    };
    match std {
        Some(s) if s.is_finite() && s > 0.0 => (window[window.len() - 1] - mean) / s,
        _ => 0.0,
    }
}

/// Divergence of the last price from the 200-period moving average, in
/// percent. Fewer than 200 observations or a zero/undefined mean yields
/// 0.0.
pub fn ma200_divergence(prices: &[f64]) -> f64 {
    if prices.len() < LONG_WINDOW {
        return 0.0;
    }
    let window = tail(prices, LONG_WINDOW);
    match window_mean_std(window).0 {
        Some(mean) if mean.is_finite() && mean != 0.0 => {
            (window[window.len() - 1] / mean - 1.0) * 100.0
        }
        _ => 0.0,
    }
}

/// Drawdown from the trailing 52-week high, in percent (0.0 at the
/// high, negative below it). Fewer than 10 observations or a
/// zero/undefined high yields 0.0.
pub fn drawdown_52w(prices: &[f64]) -> f64 {
    if prices.len() < RANGE_MIN_OBS {
        return 0.0;
    }
    let window = tail(prices, YEAR_WINDOW);
    let high = window.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    if !high.is_finite() || high == 0.0 {
        return 0.0;
    }
    (window[window.len() - 1] / high - 1.0) * 100.0
}

/// RSI with Wilder smoothing: an exponential moving average with factor
/// `1/period` over gains and sign-flipped losses. Needs `period + 1`
/// observations. When the average loss is zero the ratio is undefined
/// and the RSI is unavailable rather than clamped to 100.
pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }
    let alpha = 1.0 / period as f64;
    let mut avg_gain: Option<f64> = None;
    let mut avg_loss: Option<f64> = None;

    for pair in prices.windows(2) {
        let delta = pair[1] - pair[0];
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        avg_gain = Some(match avg_gain {
            None => gain,
            Some(prev) => alpha * gain + (1.0 - alpha) * prev,
        });
        avg_loss = Some(match avg_loss {
            None => loss,
            Some(prev) => alpha * loss + (1.0 - alpha) * prev,
        });
    }

    let avg_gain = avg_gain?;
    let avg_loss = avg_loss?;
    if avg_loss == 0.0 {
        return None;
    }
    let rs = avg_gain / avg_loss;
    Some(round_dp(100.0 - 100.0 / (1.0 + rs), 1))
}

/// Position of the last price inside the trailing 52-week range:
/// 0.0 at the low, 100.0 at the high. Unavailable below 10
/// observations or when the range collapses to a point.
pub fn range_pct_52w(prices: &[f64]) -> Option<f64> {
    if prices.len() < RANGE_MIN_OBS {
        return None;
    }
    let window = tail(prices, YEAR_WINDOW);
    let high = window.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    let low = window.iter().fold(f64::INFINITY, |a, &b| a.min(b));
    if !high.is_finite() || !low.is_finite() || high == low {
        return None;
    }
    let last = window[window.len() - 1];
    Some(round_dp((last - low) / (high - low) * 100.0, 1))
}

/// Flat per-ticker record merging identity, classification, legacy and
/// indicator fields for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub ticker: Symbol,
    pub name: String,
    pub rank: Option<u32>,
    pub aum: Option<f64>,
    pub sector: SectorId,
    pub method: ClassificationMethod,
    pub r_anchor: Option<f64>,
    /// Correlation to the registry's global reference ticker
    pub r_reference: Option<f64>,
    pub z_score: f64,
    pub ma200_pct: f64,
    pub drawdown_52w: f64,
    pub rsi: Option<f64>,
    pub range_52w: Option<f64>,
    pub cagr: f64,
    pub volatility: f64,
    pub sortino: f64,
    pub short_history: bool,
    pub inception: Option<NaiveDate>,
    pub expense_ratio: Option<f64>,
    pub is_legacy: bool,
    pub legacy_reasons: Vec<LegacyReason>,
    pub legacy_details: Vec<String>,
}

/// Assemble the display record for one classified ticker.
pub fn compute_record<D>(
    registry: &Registry,
    data: &D,
    resolver: CorrelationResolver<'_>,
    classification: &ClassificationRecord,
    legacy: &LegacyAssessment,
) -> MetricsRecord
where
    D: IdentityProvider + PriceProvider + PerfStatsProvider + ExpenseRatioProvider + ?Sized,
{
    let ticker = &classification.ticker;
    let info = data.info(ticker);
    let closes = data.closes(ticker).unwrap_or(&[]);
    let stats = data.stats(ticker).copied().unwrap_or_default();

    let inception = info.and_then(|i| i.inception);
    // Unknown inception counts as short history for display purposes.
    let short_history =
        inception.map_or(true, |d| d > registry.legacy_config().short_history_cutoff);

    MetricsRecord {
        ticker: ticker.clone(),
        name: data.display_name(ticker),
        rank: info.and_then(|i| i.rank),
        aum: info.and_then(|i| i.market_cap),
        sector: classification.sector.clone(),
        method: classification.method,
        r_anchor: classification.r_anchor.map(|r| round_dp(r, 3)),
        r_reference: resolver
            .resolve(registry.reference_ticker(), ticker)
            .map(|r| round_dp(r, 3)),
        z_score: round_dp(z_score(closes), 2),
        ma200_pct: round_dp(ma200_divergence(closes), 1),
        drawdown_52w: round_dp(drawdown_52w(closes), 1),
        rsi: rsi(closes, RSI_PERIOD),
        range_52w: range_pct_52w(closes),
        cagr: round_dp(stats.cagr, 1),
        volatility: round_dp(stats.volatility, 1),
        sortino: round_dp(stats.sortino, 2),
        short_history,
        inception,
        expense_ratio: data.expense_ratio(ticker).map(|e| round_dp(e, 6)),
        is_legacy: legacy.is_legacy,
        legacy_reasons: legacy.reasons.clone(),
        legacy_details: legacy.details.clone(),
    }
}

/// Per-sector aggregate statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorStatistics {
    pub count: usize,
    pub active: usize,
    pub legacy: usize,
    pub avg_cagr: f64,
    pub avg_volatility: f64,
    pub avg_sortino: f64,
}

fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Data::new(values.to_vec()).mean().unwrap_or(0.0)
}

/// Aggregate one sector's records. Averages run over members that are
/// neither legacy nor short-history, skipping exact-zero values (the
/// upstream "unset" sentinel).
pub fn sector_statistics<'r>(records: impl IntoIterator<Item = &'r MetricsRecord>) -> SectorStatistics {
    let mut stats = SectorStatistics::default();
    let mut cagrs = Vec::new();
    let mut vols = Vec::new();
    let mut sortinos = Vec::new();

    for record in records {
        stats.count += 1;
        if record.is_legacy {
            stats.legacy += 1;
        } else {
            stats.active += 1;
        }
        if record.is_legacy || record.short_history {
            continue;
        }
        if record.cagr != 0.0 {
            cagrs.push(record.cagr);
        }
        if record.volatility != 0.0 {
            vols.push(record.volatility);
        }
        if record.sortino != 0.0 {
            sortinos.push(record.sortino);
        }
    }

    stats.avg_cagr = round_dp(mean_of(&cagrs), 1);
    stats.avg_volatility = round_dp(mean_of(&vols), 1);
    stats.avg_sortino = round_dp(mean_of(&sortinos), 2);
    stats
}
