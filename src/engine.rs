//! Batch pipeline over one market snapshot
//!
//! Stages run in a fixed order: classification, legacy screening,
//! per-ticker metrics, sector statistics, verification. Every stage is a
//! pure function of the registry and the input snapshot, so identical
//! inputs yield an identical [`PipelineOutput`].

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classify::{sector_members, ClassificationRecord, Classifier};
use crate::correlation::{CorrelationResolver, CorrelationTable};
use crate::data::{ExpenseRatioProvider, IdentityProvider, PerfStatsProvider, PriceProvider};
use crate::legacy::{assess_ticker, assess_universe, LegacyAssessment, LegacySummary};
use crate::metrics::{compute_record, sector_statistics, MetricsRecord, SectorStatistics};
use crate::registry::Registry;
use crate::types::{SectorId, Symbol};
use crate::verify::{verify, VerifyReport, SPOT_CHECKS};

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub classification: BTreeMap<Symbol, ClassificationRecord>,
    pub sector_members: BTreeMap<SectorId, BTreeSet<Symbol>>,
    pub legacy: BTreeMap<Symbol, LegacyAssessment>,
    pub legacy_summary: BTreeMap<SectorId, LegacySummary>,
    pub metrics: BTreeMap<Symbol, MetricsRecord>,
    pub sector_stats: BTreeMap<SectorId, SectorStatistics>,
    pub report: VerifyReport,
}

/// Run the full pipeline over a universe.
///
/// Missing per-ticker data degrades to neutral values inside each stage;
/// the batch itself never fails.
pub fn run_pipeline<D>(
    registry: &Registry,
    data: &D,
    monthly: &CorrelationTable,
    daily: &CorrelationTable,
    universe: &BTreeSet<Symbol>,
) -> PipelineOutput
where
    D: IdentityProvider + PriceProvider + PerfStatsProvider + ExpenseRatioProvider + Sync,
{
    let resolver = CorrelationResolver::new(monthly, daily);

    log::info!("classifying {} tickers", universe.len());
    let classifier = Classifier::new(registry, resolver, data);
    let classification = classifier.classify_universe(universe);
    let members = sector_members(&classification);

    log::info!("screening {} sectors for legacy members", members.len());
    let (legacy, legacy_summary) = assess_universe(registry, data, &members);

    log::info!("computing metrics for {} tickers", classification.len());
    let metrics: BTreeMap<Symbol, MetricsRecord> = classification
        .par_iter()
        .map(|(ticker, record)| {
            let assessment = match legacy.get(ticker) {
                Some(assessment) => assessment.clone(),
                None => assess_ticker(registry, data, ticker),
            };
            let metrics = compute_record(registry, data, resolver, record, &assessment);
            (ticker.clone(), metrics)
        })
        .collect();

    let sector_stats: BTreeMap<SectorId, SectorStatistics> = members
        .iter()
        .map(|(sector, tickers)| {
            let stats = sector_statistics(tickers.iter().filter_map(|t| metrics.get(t)));
            (sector.clone(), stats)
        })
        .collect();

    let report = verify(registry, &classification, universe, SPOT_CHECKS);

    PipelineOutput {
        classification,
        sector_members: members,
        legacy,
        legacy_summary,
        metrics,
        sector_stats,
        report,
    }
}
