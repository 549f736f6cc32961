//! MECE sector classification waterfall
//!
//! Each ticker runs through an ordered list of named passes; the first
//! pass that produces a result wins and no later pass runs:
//!
//! 1. anchor pinning - a sector's own anchor always belongs to it
//! 2. manual sector override
//! 3. keyword rules, in registry order
//! 4. correlation argmax over sector anchors, falling back to the
//!    catch-all sector below the threshold
//!
//! After the whole universe is classified, display correlations are
//! backfilled: keyword-classified tickers get their real anchor
//! correlation, and super-sector members are re-based onto the umbrella
//! anchor.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationResolver;
use crate::data::IdentityProvider;
use crate::registry::{AssetClass, Registry};
use crate::types::{round_dp, SectorId, Symbol};

/// How a ticker ended up in its sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    Anchor,
    ManualOverride,
    Keyword,
    Correlation,
    Fallback,
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassificationMethod::Anchor => "anchor",
            ClassificationMethod::ManualOverride => "manual_override",
            ClassificationMethod::Keyword => "keyword",
            ClassificationMethod::Correlation => "correlation",
            ClassificationMethod::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

/// One ticker's final classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub ticker: Symbol,
    pub sector: SectorId,
    pub method: ClassificationMethod,
    /// Correlation to the assigned sector's anchor, recomputed for
    /// display after classification. `None` means "no data available",
    /// never a real zero. Whether the ticker was *classified* via
    /// correlation is answered by `method` alone.
    pub r_anchor: Option<f64>,
}

impl ClassificationRecord {
    fn new(ticker: &str, sector: &str, method: ClassificationMethod, r_anchor: Option<f64>) -> Self {
        Self {
            ticker: ticker.to_string(),
            sector: sector.to_string(),
            method,
            r_anchor,
        }
    }
}

/// The classification waterfall over one registry + correlation snapshot.
pub struct Classifier<'a, I: IdentityProvider + ?Sized> {
    registry: &'a Registry,
    resolver: CorrelationResolver<'a>,
    identity: &'a I,
}

type Pass<'a, I> = fn(&Classifier<'a, I>, &str) -> Option<ClassificationRecord>;

impl<'a, I: IdentityProvider + ?Sized> Classifier<'a, I> {
    pub fn new(registry: &'a Registry, resolver: CorrelationResolver<'a>, identity: &'a I) -> Self {
        Self {
            registry,
            resolver,
            identity,
        }
    }

    /// Classify a single ticker through the waterfall.
    pub fn classify(&self, ticker: &str) -> ClassificationRecord {
        let passes: [Pass<'a, I>; 4] = [
            Self::anchor_pass,
            Self::override_pass,
            Self::keyword_pass,
            Self::correlation_pass,
        ];
        for pass in passes {
            if let Some(record) = pass(self, ticker) {
                return record;
            }
        }
        // The correlation pass is total, so this is only reachable with
        // an empty pass list.
        ClassificationRecord::new(
            ticker,
            self.registry.fallback_sector(),
            ClassificationMethod::Fallback,
            None,
        )
    }

    /// Classify a whole universe. Tickers are independent, so the batch
    /// is sharded across threads; output order is deterministic.
    pub fn classify_universe(
        &self,
        universe: &BTreeSet<Symbol>,
    ) -> BTreeMap<Symbol, ClassificationRecord>
    where
        I: Sync,
    {
        use rayon::prelude::*;

        let mut classification: BTreeMap<Symbol, ClassificationRecord> = universe
            .par_iter()
            .map(|ticker| (ticker.clone(), self.classify(ticker)))
            .collect();

        self.backfill_anchor_correlations(&mut classification);
        self.backfill_super_anchor_correlations(&mut classification);

        for (method, count) in method_counts(&classification) {
            log::info!("classified via {}: {}", method, count);
        }
        classification
    }

    /// Pass 1: a sector's configured anchor is pinned to that sector,
    /// ahead of manual overrides.
    fn anchor_pass(&self, ticker: &str) -> Option<ClassificationRecord> {
        let sector = self.registry.sector_of_anchor(ticker)?;
        Some(ClassificationRecord::new(
            ticker,
            sector,
            ClassificationMethod::Anchor,
            Some(1.0),
        ))
    }

    /// Pass 2: curated ticker -> sector override. The display
    /// correlation placeholder is backfilled later.
    fn override_pass(&self, ticker: &str) -> Option<ClassificationRecord> {
        let sector = self.registry.override_for(ticker)?;
        Some(ClassificationRecord::new(
            ticker,
            sector,
            ClassificationMethod::ManualOverride,
            None,
        ))
    }

    /// Pass 3: keyword rules over the case-folded fund name.
    fn keyword_pass(&self, ticker: &str) -> Option<ClassificationRecord> {
        let name = self.identity.display_name(ticker).to_lowercase();
        let sector = self.keyword_sector(ticker, &name)?;
        Some(ClassificationRecord::new(
            ticker,
            &sector,
            ClassificationMethod::Keyword,
            None,
        ))
    }

    /// Keyword matching on an already case-folded name.
    ///
    /// Volatility-index products go to the inverse sector outright,
    /// except explicit low-volatility strategies. Then rules run in
    /// order: an exact ticker-pattern hit wins unconditionally; a
    /// keyword hit wins unless one of the rule's `exclude_if` phrases
    /// also appears, in which case matching continues with the next
    /// rule.
    pub fn keyword_sector(&self, ticker: &str, name_lower: &str) -> Option<SectorId> {
        if name_lower.contains("vix")
            || (name_lower.contains("volatility index") && !name_lower.contains("low volatility"))
        {
            return Some(self.registry.inverse_sector().clone());
        }

        for rule in self.registry.keyword_rules() {
            if rule.ticker_patterns.iter().any(|p| p == ticker) {
                return Some(rule.sector.clone());
            }
            if rule.keywords.iter().any(|k| name_lower.contains(k.as_str())) {
                if rule.exclude_if.iter().any(|e| name_lower.contains(e.as_str())) {
                    continue;
                }
                return Some(rule.sector.clone());
            }
        }
        None
    }

    /// Pass 4: argmax of resolved correlations over sector anchors.
    ///
    /// Unknown correlations do not compete. Protected core-equity
    /// tickers skip non-equity sectors entirely. Exact ties resolve to
    /// the first sector in registry order. Below the threshold the
    /// ticker falls back to the catch-all sector, keeping the best
    /// observed correlation as a diagnostic value.
    fn correlation_pass(&self, ticker: &str) -> Option<ClassificationRecord> {
        let protected = self.registry.is_protected(ticker);
        let mut best: Option<(&SectorId, f64)> = None;

        for sector in self.registry.sectors() {
            let anchor = match &sector.anchor {
                Some(anchor) => anchor,
                None => continue,
            };
            if protected && sector.asset_class != AssetClass::Equity {
                continue;
            }
            let r = match self.resolver.resolve(anchor, ticker) {
                Some(r) => r,
                None => continue,
            };
            if best.map_or(true, |(_, b)| r > b) {
                best = Some((&sector.id, r));
            }
        }

        Some(match best {
            Some((sector, r)) if r >= self.registry.corr_threshold() => ClassificationRecord::new(
                ticker,
                sector,
                ClassificationMethod::Correlation,
                Some(round_dp(r, 4)),
            ),
            Some((_, r)) => ClassificationRecord::new(
                ticker,
                self.registry.fallback_sector(),
                ClassificationMethod::Fallback,
                Some(round_dp(r, 4)),
            ),
            None => ClassificationRecord::new(
                ticker,
                self.registry.fallback_sector(),
                ClassificationMethod::Fallback,
                None,
            ),
        })
    }

    /// Backfill display correlations for keyword-classified tickers and
    /// for any record whose placeholder never got set.
    pub fn backfill_anchor_correlations(
        &self,
        classification: &mut BTreeMap<Symbol, ClassificationRecord>,
    ) {
        for (ticker, record) in classification.iter_mut() {
            if record.method != ClassificationMethod::Keyword && record.r_anchor.is_some() {
                continue;
            }
            let anchor = self
                .registry
                .sector(&record.sector)
                .and_then(|s| s.anchor.as_ref());
            if let Some(anchor) = anchor {
                record.r_anchor = self.resolver.resolve(anchor, ticker).map(|r| round_dp(r, 4));
            }
        }
    }

    /// Re-base the display correlation of every super-sector member onto
    /// the umbrella anchor, regardless of classification method. Runs
    /// after every other backfill.
    pub fn backfill_super_anchor_correlations(
        &self,
        classification: &mut BTreeMap<Symbol, ClassificationRecord>,
    ) {
        let mut updated = 0usize;
        for (ticker, record) in classification.iter_mut() {
            if let Some(anchor) = self.registry.super_anchor_for(&record.sector) {
                record.r_anchor = self.resolver.resolve(anchor, ticker).map(|r| round_dp(r, 4));
                updated += 1;
            }
        }
        if updated > 0 {
            log::debug!("re-based {} display correlations onto super-sector anchors", updated);
        }
    }
}

/// Per-sector membership sets extracted from a classification map.
pub fn sector_members(
    classification: &BTreeMap<Symbol, ClassificationRecord>,
) -> BTreeMap<SectorId, BTreeSet<Symbol>> {
    let mut members: BTreeMap<SectorId, BTreeSet<Symbol>> = BTreeMap::new();
    for (ticker, record) in classification {
        members
            .entry(record.sector.clone())
            .or_default()
            .insert(ticker.clone());
    }
    members
}

/// Tally of tickers per classification method.
pub fn method_counts(
    classification: &BTreeMap<Symbol, ClassificationRecord>,
) -> BTreeMap<ClassificationMethod, usize> {
    let mut counts = BTreeMap::new();
    for record in classification.values() {
        *counts.entry(record.method).or_insert(0) += 1;
    }
    counts
}
