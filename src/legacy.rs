//! Legacy ETF screening
//!
//! A classified member is "legacy" when it is redundant, too new or too
//! small to be decision-relevant. Rules run in fixed priority order and
//! every triggered rule appends a reason code plus a human-readable
//! detail; a ticker is legacy iff at least one reason fired.
//!
//! The curated manual map always applies. Sector anchors are exempt from
//! the automatic rules (never from the manual map, but the registry
//! rejects anchors in that map up front). Whether the automatic
//! short-history and low-AUM rules run at all is a registry policy.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::IdentityProvider;
use crate::registry::{LegacyPolicy, Registry};
use crate::types::{SectorId, Symbol};

/// Stable reason codes for legacy flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegacyReason {
    Manual,
    ShortHistory,
    LowAum,
}

impl LegacyReason {
    pub fn code(&self) -> &'static str {
        match self {
            LegacyReason::Manual => "MANUAL",
            LegacyReason::ShortHistory => "SHORT_HISTORY",
            LegacyReason::LowAum => "LOW_AUM",
        }
    }
}

impl fmt::Display for LegacyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Outcome of the legacy rules for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyAssessment {
    pub ticker: Symbol,
    pub is_legacy: bool,
    pub reasons: Vec<LegacyReason>,
    pub details: Vec<String>,
}

/// Per-sector legacy tally for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySummary {
    pub total: usize,
    pub legacy: usize,
    pub active: usize,
}

/// Evaluate the legacy rules for a single ticker.
pub fn assess_ticker<I: IdentityProvider + ?Sized>(
    registry: &Registry,
    identity: &I,
    ticker: &str,
) -> LegacyAssessment {
    let mut reasons = Vec::new();
    let mut details = Vec::new();

    // Rule 1: curated map, applied unconditionally.
    if let Some(detail) = registry.manual_legacy_detail(ticker) {
        reasons.push(LegacyReason::Manual);
        details.push(detail.to_string());
    }

    // Rule 2: anchors are exempt from everything automatic.
    let exempt = registry.is_legacy_exempt(ticker);
    let config = registry.legacy_config();

    if !exempt && config.policy == LegacyPolicy::ManualAndAutomatic {
        let info = identity.info(ticker);

        // Rule 3: known inception after the cutoff, unless already
        // flagged manually.
        if reasons.is_empty() {
            if let Some(inception) = info.and_then(|i| i.inception) {
                if inception > config.short_history_cutoff {
                    reasons.push(LegacyReason::ShortHistory);
                    details.push(format!(
                        "Listed {} (after cutoff {})",
                        inception, config.short_history_cutoff
                    ));
                }
            }
        }

        // Rule 4: known, strictly positive AUM at or below the floor.
        if reasons.is_empty() {
            if let Some(aum) = info.and_then(|i| i.market_cap) {
                if aum > 0.0 && aum <= config.min_aum {
                    reasons.push(LegacyReason::LowAum);
                    details.push(format!(
                        "AUM ${:.0}M at or below ${:.0}M floor",
                        aum / 1_000_000.0,
                        config.min_aum / 1_000_000.0
                    ));
                }
            }
        }
    }

    LegacyAssessment {
        ticker: ticker.to_string(),
        is_legacy: !reasons.is_empty(),
        reasons,
        details,
    }
}

/// Assess every classified ticker and tally per-sector counts.
pub fn assess_universe<I: IdentityProvider + ?Sized>(
    registry: &Registry,
    identity: &I,
    sector_members: &BTreeMap<SectorId, BTreeSet<Symbol>>,
) -> (BTreeMap<Symbol, LegacyAssessment>, BTreeMap<SectorId, LegacySummary>) {
    let mut assessments = BTreeMap::new();
    let mut summary = BTreeMap::new();

    for (sector, tickers) in sector_members {
        let mut legacy = 0usize;
        for ticker in tickers {
            let assessment = assess_ticker(registry, identity, ticker);
            if assessment.is_legacy {
                legacy += 1;
            }
            assessments.insert(ticker.clone(), assessment);
        }
        summary.insert(
            sector.clone(),
            LegacySummary {
                total: tickers.len(),
                legacy,
                active: tickers.len() - legacy,
            },
        );
        log::debug!(
            "sector {}: {}/{} legacy",
            sector,
            legacy,
            tickers.len()
        );
    }

    let total: usize = summary.values().map(|s| s.total).sum();
    let flagged: usize = summary.values().map(|s| s.legacy).sum();
    log::info!("legacy screening: {}/{} tickers flagged", flagged, total);

    (assessments, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MarketData;
    use crate::registry::{AssetClass, LegacyConfig, SectorDef};
    use crate::types::TickerInfo;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn registry_with_policy(policy: LegacyPolicy) -> Registry {
        Registry::builder()
            .sectors(vec![
                SectorDef::new("S01", "US Large Cap", "", Some("VOO"), AssetClass::Equity, ""),
                SectorDef::new("S18", "Gold", "", Some("GLD"), AssetClass::RealAssets, ""),
                SectorDef::new("S22", "Inverse", "", Some("SQQQ"), AssetClass::Alternative, ""),
                SectorDef::new("S24", "Thematic", "", None, AssetClass::Thematic, ""),
            ])
            .manual_legacy("IAU", "Highly correlated with GLD")
            .legacy_config(LegacyConfig {
                policy,
                short_history_cutoff: date(2022, 1, 1),
                min_aum: 100_000_000.0,
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_manual_flag_fires_first() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "IAU",
            TickerInfo {
                inception: Some(date(2024, 6, 1)),
                ..TickerInfo::default()
            },
        );
        let assessment = assess_ticker(&registry, &market, "IAU");
        assert!(assessment.is_legacy);
        // Manual wins; the short-history rule must not double-flag.
        assert_eq!(assessment.reasons, vec![LegacyReason::Manual]);
        assert_eq!(assessment.details, vec!["Highly correlated with GLD"]);
    }

    #[test]
    fn test_short_history_after_cutoff() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "XNEW",
            TickerInfo {
                inception: Some(date(2023, 3, 15)),
                ..TickerInfo::default()
            },
        );
        let assessment = assess_ticker(&registry, &market, "XNEW");
        assert!(assessment.is_legacy);
        assert_eq!(assessment.reasons, vec![LegacyReason::ShortHistory]);
    }

    #[test]
    fn test_inception_on_cutoff_is_not_short_history() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "XOLD",
            TickerInfo {
                inception: Some(date(2022, 1, 1)),
                ..TickerInfo::default()
            },
        );
        assert!(!assess_ticker(&registry, &market, "XOLD").is_legacy);
    }

    #[test]
    fn test_low_aum_at_floor_fires() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "XSMALL",
            TickerInfo {
                market_cap: Some(100_000_000.0),
                ..TickerInfo::default()
            },
        );
        let assessment = assess_ticker(&registry, &market, "XSMALL");
        assert_eq!(assessment.reasons, vec![LegacyReason::LowAum]);
    }

    #[test]
    fn test_zero_aum_is_unknown_not_low() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "XZERO",
            TickerInfo {
                market_cap: Some(0.0),
                ..TickerInfo::default()
            },
        );
        assert!(!assess_ticker(&registry, &market, "XZERO").is_legacy);
    }

    #[test]
    fn test_anchor_exempt_from_automatic_rules() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "GLD",
            TickerInfo {
                inception: Some(date(2025, 1, 1)),
                market_cap: Some(1_000_000.0),
                ..TickerInfo::default()
            },
        );
        assert!(!assess_ticker(&registry, &market, "GLD").is_legacy);
    }

    #[test]
    fn test_manual_only_policy_skips_automatic_rules() {
        let registry = registry_with_policy(LegacyPolicy::ManualOnly);
        let mut market = MarketData::new();
        market.add_info(
            "XNEW",
            TickerInfo {
                inception: Some(date(2024, 1, 1)),
                market_cap: Some(1_000_000.0),
                ..TickerInfo::default()
            },
        );
        assert!(!assess_ticker(&registry, &market, "XNEW").is_legacy);
        // The curated map still applies under ManualOnly.
        assert!(assess_ticker(&registry, &market, "IAU").is_legacy);
    }

    #[test]
    fn test_missing_identity_never_flags() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let market = MarketData::new();
        assert!(!assess_ticker(&registry, &market, "XGHOST").is_legacy);
    }

    #[test]
    fn test_sector_summary_counts() {
        let registry = registry_with_policy(LegacyPolicy::ManualAndAutomatic);
        let mut market = MarketData::new();
        market.add_info(
            "XNEW",
            TickerInfo {
                inception: Some(date(2024, 1, 1)),
                ..TickerInfo::default()
            },
        );
        let mut members: BTreeMap<SectorId, BTreeSet<Symbol>> = BTreeMap::new();
        members.insert(
            "S18".to_string(),
            ["GLD", "IAU", "XNEW"].iter().map(|s| s.to_string()).collect(),
        );

        let (assessments, summary) = assess_universe(&registry, &market, &members);
        assert_eq!(assessments.len(), 3);
        let s18 = summary["S18"];
        assert_eq!(s18.total, 3);
        assert_eq!(s18.legacy, 2); // IAU manual + XNEW short history
        assert_eq!(s18.active, 1);
    }

    #[test]
    fn test_reason_codes_serialize_as_screaming_snake() {
        let json = serde_json::to_string(&LegacyReason::ShortHistory).unwrap();
        assert_eq!(json, "\"SHORT_HISTORY\"");
        assert_eq!(LegacyReason::LowAum.to_string(), "LOW_AUM");
    }
}
