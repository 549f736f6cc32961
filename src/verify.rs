//! Consistency checks over a finished classification
//!
//! Diagnostic only: the verifier never mutates the classification and
//! never returns an error. Findings are split into errors (the run is
//! inconsistent) and warnings (worth a look, but the partition itself
//! holds). Exclusivity is structural, one map entry per ticker, so only
//! exhaustiveness and known-answer checks remain.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::classify::{sector_members, ClassificationRecord};
use crate::registry::Registry;
use crate::types::Symbol;

/// Flagship ETFs with undisputed sector membership, used as a
/// known-answer table against classification drift.
pub const SPOT_CHECKS: &[(&str, &str)] = &[
    ("VOO", "S01"),
    ("SPY", "S01"),
    ("VTI", "S01"),
    ("QQQ", "S02"),
    ("XLK", "S02"),
    ("SMH", "S02"),
    ("XLV", "S03"),
    ("IBB", "S03"),
    ("XLF", "S04"),
    ("KRE", "S04"),
    ("XLY", "S05"),
    ("XLP", "S06"),
    ("XLI", "S07"),
    ("XLU", "S08"),
    ("XLC", "S09"),
    ("XLB", "S10"),
    ("VEA", "S11"),
    ("IEFA", "S11"),
    ("EFA", "S11"),
    ("VWO", "S12"),
    ("EEM", "S12"),
    ("IWM", "S13"),
    ("IJR", "S13"),
    ("BND", "S14"),
    ("AGG", "S14"),
    ("SHV", "S15"),
    ("BIL", "S15"),
    ("SGOV", "S15"),
    ("HYG", "S16"),
    ("JNK", "S16"),
    ("SCHP", "S17"),
    ("TIP", "S17"),
    ("GLD", "S18"),
    ("IAU", "S18"),
    ("GDX", "S18"),
    ("XLE", "S19"),
    ("AMLP", "S19"),
    ("VNQ", "S20"),
    ("IYR", "S20"),
    ("GBTC", "S21"),
    ("IBIT", "S21"),
    ("SQQQ", "S22"),
    ("SH", "S22"),
];

/// Outcome of the consistency checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl VerifyReport {
    /// Warnings alone do not fail a run.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

fn preview(names: &BTreeSet<&Symbol>) -> String {
    let mut shown: Vec<&str> = names.iter().take(20).map(|s| s.as_str()).collect();
    if names.len() > shown.len() {
        shown.push("...");
    }
    shown.join(", ")
}

/// Check a classification against the supplied universe and a
/// known-answer table.
pub fn verify(
    registry: &Registry,
    classification: &BTreeMap<Symbol, ClassificationRecord>,
    universe: &BTreeSet<Symbol>,
    expected: &[(&str, &str)],
) -> VerifyReport {
    let mut report = VerifyReport::default();
    let classified: BTreeSet<&Symbol> = classification.keys().collect();
    let wanted: BTreeSet<&Symbol> = universe.iter().collect();

    let missing: BTreeSet<&Symbol> = wanted.difference(&classified).copied().collect();
    if !missing.is_empty() {
        report.errors.push(format!(
            "{} unclassified tickers: {}",
            missing.len(),
            preview(&missing)
        ));
    }
    let extra: BTreeSet<&Symbol> = classified.difference(&wanted).copied().collect();
    if !extra.is_empty() {
        report.warnings.push(format!(
            "{} classified tickers outside the universe: {}",
            extra.len(),
            preview(&extra)
        ));
    }

    // Per-sector counts over registry sectors must account for every
    // classified ticker; a shortfall means some record carries a sector
    // id the registry does not know.
    let members = sector_members(classification);
    let mut total = 0usize;
    for sector in registry.sectors() {
        total += members.get(&sector.id).map_or(0, |m| m.len());
    }
    for sector in members.keys() {
        if registry.sector(sector).is_none() {
            report
                .errors
                .push(format!("unknown sector id in classification: {}", sector));
        }
    }
    if total != classification.len() {
        report.errors.push(format!(
            "sector counts sum to {} but {} tickers are classified",
            total,
            classification.len()
        ));
    }

    for (ticker, expected_sector) in expected {
        let record = match classification.get(*ticker) {
            Some(record) => record,
            None => continue,
        };
        if record.sector != *expected_sector {
            report.errors.push(format!(
                "{}: expected {}, got {} (via {})",
                ticker, expected_sector, record.sector, record.method
            ));
        }
    }

    if report.passed() {
        log::info!(
            "verification passed: {} tickers, {} warnings",
            classification.len(),
            report.warnings.len()
        );
    } else {
        for error in &report.errors {
            log::warn!("verification: {}", error);
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ClassificationMethod;

    fn record(ticker: &str, sector: &str) -> ClassificationRecord {
        ClassificationRecord {
            ticker: ticker.to_string(),
            sector: sector.to_string(),
            method: ClassificationMethod::Anchor,
            r_anchor: Some(1.0),
        }
    }

    fn fixture(
        pairs: &[(&str, &str)],
    ) -> (BTreeMap<Symbol, ClassificationRecord>, BTreeSet<Symbol>) {
        let classification = pairs
            .iter()
            .map(|(t, s)| (t.to_string(), record(t, s)))
            .collect();
        let universe = pairs.iter().map(|(t, _)| t.to_string()).collect();
        (classification, universe)
    }

    #[test]
    fn test_consistent_run_passes() {
        let registry = Registry::default_taxonomy().unwrap();
        let (classification, universe) = fixture(&[("VOO", "S01"), ("GLD", "S18")]);
        let report = verify(&registry, &classification, &universe, SPOT_CHECKS);
        assert!(report.passed(), "unexpected errors: {:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_ticker_is_an_error() {
        let registry = Registry::default_taxonomy().unwrap();
        let (classification, mut universe) = fixture(&[("VOO", "S01")]);
        universe.insert("GLD".to_string());
        let report = verify(&registry, &classification, &universe, &[]);
        assert!(!report.passed());
        assert!(report.errors[0].contains("GLD"));
    }

    #[test]
    fn test_extra_ticker_is_a_warning_only() {
        let registry = Registry::default_taxonomy().unwrap();
        let (classification, mut universe) = fixture(&[("VOO", "S01"), ("GLD", "S18")]);
        universe.remove("GLD");
        let report = verify(&registry, &classification, &universe, &[]);
        assert!(report.passed());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("GLD"));
    }

    #[test]
    fn test_spot_check_mismatch_is_reported_by_name() {
        let registry = Registry::default_taxonomy().unwrap();
        let (classification, universe) = fixture(&[("GLD", "S24")]);
        let report = verify(&registry, &classification, &universe, SPOT_CHECKS);
        assert!(!report.passed());
        assert!(report.errors.iter().any(|e| e.contains("GLD") && e.contains("S18")));
    }

    #[test]
    fn test_spot_check_skips_absent_tickers() {
        let registry = Registry::default_taxonomy().unwrap();
        let (classification, universe) = fixture(&[("VOO", "S01")]);
        // Only VOO is present; the other ~40 pairs must not fire.
        let report = verify(&registry, &classification, &universe, SPOT_CHECKS);
        assert!(report.passed(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_unknown_sector_id_is_an_error() {
        let registry = Registry::default_taxonomy().unwrap();
        let (classification, universe) = fixture(&[("XBAD", "S99")]);
        let report = verify(&registry, &classification, &universe, &[]);
        assert!(!report.passed());
        assert!(report.errors.iter().any(|e| e.contains("S99")));
    }

    #[test]
    fn test_spot_check_table_targets_known_sectors() {
        let registry = Registry::default_taxonomy().unwrap();
        for (ticker, sector) in SPOT_CHECKS {
            assert!(
                registry.sector(sector).is_some(),
                "{} points at undefined sector {}",
                ticker,
                sector
            );
        }
    }
}
