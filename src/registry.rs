//! Taxonomy Registry - sector definitions, rules and thresholds
//!
//! The registry is constructed once per run, validated up front and
//! treated as read-only afterwards. It is passed by reference into every
//! stage of the pipeline; nothing in this crate reads taxonomy data from
//! globals. Registry validation is the only place a hard error is
//! acceptable - a dangling sector reference or duplicate anchor must fail
//! before any ticker is classified.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};
use crate::types::{SectorId, Symbol};

/// Broad asset class of a sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    FixedIncome,
    RealAssets,
    Alternative,
    Thematic,
}

impl AssetClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::FixedIncome => "Fixed Income",
            AssetClass::RealAssets => "Real Assets",
            AssetClass::Alternative => "Alternatives",
            AssetClass::Thematic => "Thematic",
        }
    }

    /// Display ordering on the dashboard
    pub fn order(&self) -> u8 {
        match self {
            AssetClass::Equity => 1,
            AssetClass::FixedIncome => 2,
            AssetClass::RealAssets => 3,
            AssetClass::Alternative => 4,
            AssetClass::Thematic => 5,
        }
    }
}

/// A single sector of the MECE partition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDef {
    pub id: SectorId,
    /// Display name
    pub name: String,
    /// Display name, secondary locale
    pub local_name: String,
    /// Reference ETF defining the sector's correlation benchmark.
    /// The catch-all sector has none.
    pub anchor: Option<Symbol>,
    pub asset_class: AssetClass,
    pub icon: String,
}

impl SectorDef {
    pub fn new(
        id: &str,
        name: &str,
        local_name: &str,
        anchor: Option<&str>,
        asset_class: AssetClass,
        icon: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            local_name: local_name.to_string(),
            anchor: anchor.map(|a| a.to_string()),
            asset_class,
            icon: icon.to_string(),
        }
    }
}

/// Groups several sectors under one umbrella anchor.
///
/// Used only to re-derive the display correlation of member tickers;
/// never changes sector membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuperSectorDef {
    pub id: String,
    pub anchor: Symbol,
    pub members: Vec<SectorId>,
}

impl SuperSectorDef {
    pub fn new(id: &str, anchor: &str, members: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            anchor: anchor.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Keyword classification rule for one sector.
///
/// Rules are evaluated in definition order; the order is part of the
/// classification contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub sector: SectorId,
    /// Case-insensitive name substrings
    pub keywords: Vec<String>,
    /// Literal tickers assigned outright; never vetoed by `exclude_if`
    pub ticker_patterns: Vec<Symbol>,
    /// Name substrings that veto a keyword match for this sector only
    pub exclude_if: Vec<String>,
}

impl KeywordRule {
    pub fn new(sector: &str, keywords: &[&str], ticker_patterns: &[&str], exclude_if: &[&str]) -> Self {
        Self {
            sector: sector.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ticker_patterns: ticker_patterns.iter().map(|t| t.to_string()).collect(),
            exclude_if: exclude_if.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Which legacy-assessment rules run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegacyPolicy {
    /// Curated manual map only
    ManualOnly,
    /// Curated map plus the short-history and low-AUM rules
    ManualAndAutomatic,
}

/// Legacy screening thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyConfig {
    pub policy: LegacyPolicy,
    /// Inceptions strictly after this date count as "too new"
    pub short_history_cutoff: NaiveDate,
    /// AUM at or below this floor counts as "too small", USD
    pub min_aum: f64,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            policy: LegacyPolicy::ManualAndAutomatic,
            short_history_cutoff: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap_or_default(),
            min_aum: 100_000_000.0,
        }
    }
}

/// Immutable, validated taxonomy for one pipeline run.
#[derive(Debug, Clone)]
pub struct Registry {
    sectors: Vec<SectorDef>,
    sector_index: BTreeMap<SectorId, usize>,
    super_sectors: Vec<SuperSectorDef>,
    keyword_rules: Vec<KeywordRule>,
    sector_overrides: BTreeMap<Symbol, SectorId>,
    manual_legacy: BTreeMap<Symbol, String>,
    protected_equities: BTreeSet<Symbol>,
    anchor_to_sector: BTreeMap<Symbol, SectorId>,
    super_anchor_by_sector: BTreeMap<SectorId, Symbol>,
    legacy_exemptions: BTreeSet<Symbol>,
    corr_threshold: f64,
    fallback_sector: SectorId,
    inverse_sector: SectorId,
    reference_ticker: Symbol,
    legacy: LegacyConfig,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The production taxonomy: 23 sectors across five asset classes,
    /// keyword rules, the protected core-equity set and the curated
    /// legacy map.
    pub fn default_taxonomy() -> Result<Self> {
        let mut builder = Self::builder()
            .sectors(default_sectors())
            .super_sector(SuperSectorDef::new(
                "EQUITY_MARKET",
                "QQQ",
                &["S01", "S02", "S13"],
            ))
            .keyword_rules(default_keyword_rules())
            .corr_threshold(0.55)
            .fallback_sector("S24")
            .inverse_sector("S22")
            .reference_ticker("SPY")
            .legacy_config(LegacyConfig::default());
        for ticker in PROTECTED_EQUITIES {
            builder = builder.protect(ticker);
        }
        for (ticker, detail) in MANUAL_LEGACY {
            builder = builder.manual_legacy(ticker, detail);
        }
        builder.build()
    }

    /// Sectors in definition order. Order doubles as keyword rule
    /// priority and the argmax tie-break order.
    pub fn sectors(&self) -> &[SectorDef] {
        &self.sectors
    }

    pub fn sector(&self, id: &str) -> Option<&SectorDef> {
        self.sector_index.get(id).map(|&i| &self.sectors[i])
    }

    pub fn super_sectors(&self) -> &[SuperSectorDef] {
        &self.super_sectors
    }

    pub fn keyword_rules(&self) -> &[KeywordRule] {
        &self.keyword_rules
    }

    /// Sector whose configured anchor is `ticker`, if any
    pub fn sector_of_anchor(&self, ticker: &str) -> Option<&SectorId> {
        self.anchor_to_sector.get(ticker)
    }

    /// Manual ticker -> sector override
    pub fn override_for(&self, ticker: &str) -> Option<&SectorId> {
        self.sector_overrides.get(ticker)
    }

    /// Curated legacy explanation for `ticker`, if flagged
    pub fn manual_legacy_detail(&self, ticker: &str) -> Option<&str> {
        self.manual_legacy.get(ticker).map(|s| s.as_str())
    }

    /// Core-equity tickers never pulled to non-equity anchors
    pub fn is_protected(&self, ticker: &str) -> bool {
        self.protected_equities.contains(ticker)
    }

    /// Anchors are exempt from all automatic legacy rules
    pub fn is_legacy_exempt(&self, ticker: &str) -> bool {
        self.legacy_exemptions.contains(ticker)
    }

    /// Umbrella anchor overriding the display correlation for members of
    /// a super-sector
    pub fn super_anchor_for(&self, sector: &str) -> Option<&Symbol> {
        self.super_anchor_by_sector.get(sector)
    }

    /// Minimum correlation for a pass-4 assignment
    pub fn corr_threshold(&self) -> f64 {
        self.corr_threshold
    }

    /// Catch-all/thematic sector for tickers nothing else claims
    pub fn fallback_sector(&self) -> &SectorId {
        &self.fallback_sector
    }

    /// Target of the volatility-index keyword special case
    pub fn inverse_sector(&self) -> &SectorId {
        &self.inverse_sector
    }

    /// Global reference ticker for the display correlation column
    pub fn reference_ticker(&self) -> &Symbol {
        &self.reference_ticker
    }

    pub fn legacy_config(&self) -> &LegacyConfig {
        &self.legacy
    }
}

/// Builder for [`Registry`]; `build` runs all load-time validation.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    sectors: Vec<SectorDef>,
    super_sectors: Vec<SuperSectorDef>,
    keyword_rules: Vec<KeywordRule>,
    sector_overrides: BTreeMap<Symbol, SectorId>,
    manual_legacy: BTreeMap<Symbol, String>,
    protected_equities: BTreeSet<Symbol>,
    corr_threshold: f64,
    fallback_sector: SectorId,
    inverse_sector: SectorId,
    reference_ticker: Symbol,
    legacy: LegacyConfig,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            sectors: Vec::new(),
            super_sectors: Vec::new(),
            keyword_rules: Vec::new(),
            sector_overrides: BTreeMap::new(),
            manual_legacy: BTreeMap::new(),
            protected_equities: BTreeSet::new(),
            corr_threshold: 0.55,
            fallback_sector: "S24".to_string(),
            inverse_sector: "S22".to_string(),
            reference_ticker: "SPY".to_string(),
            legacy: LegacyConfig::default(),
        }
    }
}

impl RegistryBuilder {
    pub fn sector(mut self, sector: SectorDef) -> Self {
        self.sectors.push(sector);
        self
    }

    pub fn sectors(mut self, sectors: Vec<SectorDef>) -> Self {
        self.sectors.extend(sectors);
        self
    }

    pub fn super_sector(mut self, ss: SuperSectorDef) -> Self {
        self.super_sectors.push(ss);
        self
    }

    pub fn keyword_rule(mut self, rule: KeywordRule) -> Self {
        self.keyword_rules.push(rule);
        self
    }

    pub fn keyword_rules(mut self, rules: Vec<KeywordRule>) -> Self {
        self.keyword_rules.extend(rules);
        self
    }

    pub fn override_sector(mut self, ticker: &str, sector: &str) -> Self {
        self.sector_overrides
            .insert(ticker.to_string(), sector.to_string());
        self
    }

    pub fn manual_legacy(mut self, ticker: &str, detail: &str) -> Self {
        self.manual_legacy
            .insert(ticker.to_string(), detail.to_string());
        self
    }

    pub fn protect(mut self, ticker: &str) -> Self {
        self.protected_equities.insert(ticker.to_string());
        self
    }

    pub fn corr_threshold(mut self, threshold: f64) -> Self {
        self.corr_threshold = threshold;
        self
    }

    pub fn fallback_sector(mut self, id: &str) -> Self {
        self.fallback_sector = id.to_string();
        self
    }

    pub fn inverse_sector(mut self, id: &str) -> Self {
        self.inverse_sector = id.to_string();
        self
    }

    pub fn reference_ticker(mut self, ticker: &str) -> Self {
        self.reference_ticker = ticker.to_string();
        self
    }

    pub fn legacy_config(mut self, config: LegacyConfig) -> Self {
        self.legacy = config;
        self
    }

    /// Validate and freeze the registry.
    pub fn build(self) -> Result<Registry> {
        if self.sectors.is_empty() {
            return Err(CompassError::Registry("no sectors defined".to_string()));
        }
        if !self.corr_threshold.is_finite() || self.corr_threshold <= 0.0 || self.corr_threshold > 1.0 {
            return Err(CompassError::Registry(format!(
                "correlation threshold {} outside (0, 1]",
                self.corr_threshold
            )));
        }
        if self.legacy.min_aum < 0.0 {
            return Err(CompassError::Registry(format!(
                "negative AUM floor {}",
                self.legacy.min_aum
            )));
        }

        let mut sector_index = BTreeMap::new();
        let mut anchor_to_sector = BTreeMap::new();
        for (idx, sector) in self.sectors.iter().enumerate() {
            if sector_index.insert(sector.id.clone(), idx).is_some() {
                return Err(CompassError::Registry(format!(
                    "duplicate sector id {}",
                    sector.id
                )));
            }
            if let Some(anchor) = &sector.anchor {
                if anchor_to_sector
                    .insert(anchor.clone(), sector.id.clone())
                    .is_some()
                {
                    return Err(CompassError::Registry(format!(
                        "anchor {} assigned to more than one sector",
                        anchor
                    )));
                }
            }
        }

        for rule in &self.keyword_rules {
            if !sector_index.contains_key(&rule.sector) {
                return Err(CompassError::Registry(format!(
                    "keyword rule references unknown sector {}",
                    rule.sector
                )));
            }
        }

        let mut super_anchor_by_sector = BTreeMap::new();
        for ss in &self.super_sectors {
            if ss.anchor.is_empty() {
                return Err(CompassError::Registry(format!(
                    "super-sector {} has no anchor",
                    ss.id
                )));
            }
            for member in &ss.members {
                if !sector_index.contains_key(member) {
                    return Err(CompassError::Registry(format!(
                        "super-sector {} references unknown sector {}",
                        ss.id, member
                    )));
                }
                super_anchor_by_sector.insert(member.clone(), ss.anchor.clone());
            }
        }

        for (ticker, sector) in &self.sector_overrides {
            if !sector_index.contains_key(sector) {
                return Err(CompassError::Registry(format!(
                    "override {} -> {} references unknown sector",
                    ticker, sector
                )));
            }
        }

        for target in [&self.fallback_sector, &self.inverse_sector] {
            if !sector_index.contains_key(target) {
                return Err(CompassError::Registry(format!(
                    "configured sector {} does not exist",
                    target
                )));
            }
        }

        // Anchors are exempt from automatic legacy rules; flagging one in
        // the curated map is a configuration mistake.
        let legacy_exemptions: BTreeSet<Symbol> = anchor_to_sector.keys().cloned().collect();
        for anchor in &legacy_exemptions {
            if self.manual_legacy.contains_key(anchor) {
                return Err(CompassError::Registry(format!(
                    "anchor {} appears in the manual legacy map",
                    anchor
                )));
            }
        }

        Ok(Registry {
            sectors: self.sectors,
            sector_index,
            super_sectors: self.super_sectors,
            keyword_rules: self.keyword_rules,
            sector_overrides: self.sector_overrides,
            manual_legacy: self.manual_legacy,
            protected_equities: self.protected_equities,
            anchor_to_sector,
            super_anchor_by_sector,
            legacy_exemptions,
            corr_threshold: self.corr_threshold,
            fallback_sector: self.fallback_sector,
            inverse_sector: self.inverse_sector,
            reference_ticker: self.reference_ticker,
            legacy: self.legacy,
        })
    }
}

fn default_sectors() -> Vec<SectorDef> {
    use AssetClass::*;
    vec![
        // Equity (13)
        SectorDef::new("S01", "US Large Cap", "US 대형주 종합", Some("VOO"), Equity, "🇺🇸"),
        SectorDef::new("S02", "Technology", "테크놀로지", Some("XLK"), Equity, "💻"),
        SectorDef::new("S03", "Healthcare", "헬스케어", Some("XLV"), Equity, "🏥"),
        SectorDef::new("S04", "Financials", "금융", Some("XLF"), Equity, "🏦"),
        SectorDef::new("S05", "Consumer Discretionary", "경기소비재", Some("XLY"), Equity, "🛍️"),
        SectorDef::new("S06", "Consumer Staples", "필수소비재", Some("XLP"), Equity, "🛒"),
        SectorDef::new("S07", "Industrials", "산업재", Some("XLI"), Equity, "🏭"),
        SectorDef::new("S08", "Utilities", "유틸리티", Some("XLU"), Equity, "⚡"),
        SectorDef::new("S09", "Communication", "커뮤니케이션", Some("XLC"), Equity, "📡"),
        SectorDef::new("S10", "Materials", "소재", Some("XLB"), Equity, "⛏️"),
        SectorDef::new("S11", "Intl Developed", "국제선진국", Some("VEA"), Equity, "🌍"),
        SectorDef::new("S12", "Emerging Markets", "신흥국", Some("VWO"), Equity, "🌏"),
        SectorDef::new("S13", "Small/Mid Cap", "중소형주", Some("IWM"), Equity, "📊"),
        // Fixed income (4)
        SectorDef::new("S14", "Investment Grade", "투자등급 채권", Some("BND"), FixedIncome, "🏛️"),
        SectorDef::new("S15", "Short-Term/Cash", "단기채/현금성", Some("SHV"), FixedIncome, "💵"),
        SectorDef::new("S16", "High Yield/EM Debt", "하이일드/신흥채", Some("HYG"), FixedIncome, "⚠️"),
        SectorDef::new("S17", "TIPS/Inflation", "TIPS/인플레이션", Some("SCHP"), FixedIncome, "📈"),
        // Real assets (3)
        SectorDef::new("S18", "Gold/Precious Metals", "금/귀금속", Some("GLD"), RealAssets, "✨"),
        SectorDef::new("S19", "Energy/Commodities", "에너지/원자재", Some("XLE"), RealAssets, "🛢️"),
        SectorDef::new("S20", "Real Estate/REITs", "부동산/REITs", Some("VNQ"), RealAssets, "🏘️"),
        // Alternatives (2); leveraged-long products classify into their
        // underlying sector via correlation, so there is no S23.
        SectorDef::new("S21", "Crypto/Digital", "가상자산", Some("GBTC"), Alternative, "₿"),
        SectorDef::new("S22", "Inverse/Short", "인버스/숏", Some("SQQQ"), Alternative, "📉"),
        // Thematic catch-all (no anchor)
        SectorDef::new("S24", "Thematic/Specialty", "테마/특수목적", None, Thematic, "🧩"),
    ]
}

/// Phrases identifying short-term bond funds. Keeps them out of the
/// inverse sector ("short" collides) and keys the S15 keyword rule.
pub const SHORT_TERM_BOND_WORDS: &[&str] = &[
    "short term",
    "short-term",
    "short duration",
    "short-duration",
    "short maturity",
    "0-1 year",
    "1-3 year",
    "ultra-short",
    "ultra short",
    "floating rate",
    "floating-rate",
    "money market",
    "treasury bill",
    "cash reserve",
];

fn default_keyword_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            "S22",
            &[
                "inverse",
                " bear ",
                "proshares short",
                "proshares ultrashort",
                "-1x ",
                "-2x ",
                "-3x ",
                "short s&p",
                "short dow",
                "short nasdaq",
                "short russell",
                "short midcap",
                "short smallcap",
                "short ftse",
                "short msci",
                "short real estate",
                "short high yield",
            ],
            &[
                "SH", "PSQ", "DOG", "RWM", "SDS", "QID", "DXD", "TWM", "SPXU", "SQQQ", "SDOW",
                "SRTY", "SPXS", "TZA", "FAZ", "ERY", "LABD", "YANG", "DUST", "JDST", "DRIP",
                "GDXD", "WEBS", "UVIX", "VIXY", "VXX", "SVXY",
                // ProShares UltraShort series on non-equity underlyings
                "GLL", "ZSL", "EUO", "BZQ", "EWV", "EPV", "FXP", "SSG", "SCO", "SDP", "BIS",
                "SRS", "KOLD", "RXD", "SDD",
            ],
            SHORT_TERM_BOND_WORDS,
        ),
        KeywordRule::new(
            "S21",
            &[
                "bitcoin",
                "crypto",
                "ethereum",
                "blockchain",
                "digital asset",
                "digital currency",
            ],
            &[
                "GBTC", "IBIT", "FBTC", "ARKB", "BITB", "HODL", "BRRR", "EZBC", "BTCO", "BTCW",
                "DEFI", "ETHE", "ETHV", "CETH", "FETH", "ETHW",
            ],
            &[],
        ),
        KeywordRule::new(
            "S17",
            &[
                "tips",
                "inflation protected",
                "inflation-protected",
                "treasury inflation",
                "real return",
            ],
            &[
                "SCHP", "TIP", "VTIP", "STIP", "LTPZ", "SPIP", "TIPX", "PBTP", "RINF",
            ],
            &[],
        ),
        KeywordRule::new(
            "S15",
            SHORT_TERM_BOND_WORDS,
            &[
                "SHV", "BIL", "SGOV", "SHY", "VGSH", "SCHO", "NEAR", "MINT", "JPST", "GSY",
                "GBIL", "VBIL", "USFR", "TFLO", "FLOT", "FLRN", "ISHUF",
            ],
            &[],
        ),
        KeywordRule::new(
            "S16",
            &[
                "high yield",
                "high-yield",
                "junk bond",
                "fallen angel",
                "senior loan",
                "leveraged loan",
                "bank loan",
                "emerging market bond",
                "emerging market debt",
                "emerging markets bond",
            ],
            &[
                "HYG", "JNK", "USHY", "HYLB", "SHYG", "HYDB", "ANGL", "BKLN", "SRLN", "EMB",
                "VWOB", "PCY", "EMLC", "EMHY",
            ],
            &[],
        ),
        KeywordRule::new(
            "S20",
            &[
                "reit",
                "real estate",
                "mortgage",
                "home builder",
                "homebuilder",
                "housing",
            ],
            &[
                "VNQ", "SCHH", "IYR", "XLRE", "USRT", "VNQI", "RWO", "REET", "FREL", "BBRE",
                "REZ", "RWR", "ICF", "MORT", "REM",
            ],
            &[],
        ),
        // "goldman" guards against Goldman Sachs fund names, "golden
        // dragon" against Invesco Golden Dragon China (PGJ).
        KeywordRule::new(
            "S18",
            &[
                "gold",
                "silver",
                "precious metal",
                "platinum",
                "palladium",
                "gold miner",
                "silver miner",
                "mining",
            ],
            &[
                "GLD", "IAU", "SLV", "GDX", "GDXJ", "SIL", "SILJ", "GLDM", "SGOL", "PHYS",
                "PSLV", "RING", "GOAU", "AAAU", "BAR", "OUNZ", "GLTR", "PPLT", "PALL", "SIVR",
                "SLVP", "GDLM",
            ],
            &["goldman", "golden dragon"],
        ),
    ]
}

/// Core equity ETFs that must never be pulled to a non-equity anchor in
/// the correlation pass. XLE is the S19 anchor and deliberately absent.
const PROTECTED_EQUITIES: &[&str] = &[
    "VOO", "IVV", "SPY", "VTI", "VEA", "IEFA", "VWO", "IEMG", "VXUS", "VT", "SCHB", "ITOT",
    "SCHX", "VV", "IWB", "QQQ", "IVW", "VUG", "IWF", "VTV", "IWD", "IWM", "IJR", "IJH", "MDY",
    "VB", "VO", "IWR", "IWO", "IWN", "VBR", "VBK", "XLK", "XLV", "XLF", "XLY", "XLP", "XLI",
    "XLU", "XLC", "XLB", "SMH", "SOXX",
];

const NEAR_GLD: &str = "Highly correlated with GLD";
const NEAR_VNQ: &str = "Highly correlated with VNQ";
const NEAR_XLE: &str = "Highly correlated with XLE";
const TOO_RECENT: &str = "Listed too recently";
const LOW_REWARD: &str = "Low return for its volatility";

/// Curated legacy map: ticker -> free-text explanation.
const MANUAL_LEGACY: &[(&str, &str)] = &[
    // Gold/precious metals near-duplicates of GLD
    ("IAU", NEAR_GLD),
    ("SLV", NEAR_GLD),
    ("GDLM", NEAR_GLD),
    ("GDX", NEAR_GLD),
    ("PHYS", NEAR_GLD),
    ("PSLV", NEAR_GLD),
    ("GDXJ", NEAR_GLD),
    ("SGOL", NEAR_GLD),
    ("SIVR", NEAR_GLD),
    ("SIL", NEAR_GLD),
    ("SILJ", NEAR_GLD),
    ("GLTR", NEAR_GLD),
    ("RING", NEAR_GLD),
    ("AAAU", NEAR_GLD),
    ("OUNZ", NEAR_GLD),
    ("BAR", NEAR_GLD),
    ("SLVP", NEAR_GLD),
    ("SGDM", NEAR_GLD),
    ("SGDJ", NEAR_GLD),
    ("GLDM", NEAR_GLD),
    ("IAUM", TOO_RECENT),
    ("GDE", TOO_RECENT),
    ("IGLD", TOO_RECENT),
    ("FGDL", TOO_RECENT),
    ("SLVR", NEAR_GLD),
    ("IAUI", NEAR_GLD),
    ("GDMN", TOO_RECENT),
    ("AUMI", NEAR_GLD),
    ("AGMI", NEAR_GLD),
    ("GOAU", NEAR_GLD),
    ("GOEX", NEAR_GLD),
    ("GLDI", NEAR_GLD),
    ("SHNY", TOO_RECENT),
    ("GDXU", NEAR_GLD),
    ("AGQ", NEAR_GLD),
    ("NUGT", NEAR_GLD),
    ("PPLT", LOW_REWARD),
    ("PALL", LOW_REWARD),
    ("PLTM", LOW_REWARD),
    // Real-estate near-duplicates of VNQ
    ("SCHH", NEAR_VNQ),
    ("XLRE", NEAR_VNQ),
    ("BBRE", NEAR_VNQ),
    ("REET", NEAR_VNQ),
    ("IYR", NEAR_VNQ),
    ("VNQI", NEAR_VNQ),
    ("USRT", NEAR_VNQ),
    ("FREL", NEAR_VNQ),
    ("RWO", NEAR_VNQ),
    ("HAUZ", NEAR_VNQ),
    ("REZ", NEAR_VNQ),
    ("JPRE", TOO_RECENT),
    ("IYRI", TOO_RECENT),
    ("REIT", TOO_RECENT),
    ("MORT", NEAR_VNQ),
    ("SRVR", NEAR_VNQ),
    ("RWX", NEAR_VNQ),
    ("FRI", NEAR_VNQ),
    ("RSPR", NEAR_VNQ),
    ("IFGL", NEAR_VNQ),
    ("PSR", NEAR_VNQ),
    ("XTRE", NEAR_VNQ),
    ("FPRO", TOO_RECENT),
    ("ERET", TOO_RECENT),
    ("JRE", TOO_RECENT),
    ("DESK", TOO_RECENT),
    ("NURE", NEAR_VNQ),
    ("WTRE", NEAR_VNQ),
    ("RNTY", TOO_RECENT),
    ("RDOG", NEAR_VNQ),
    ("RWR", NEAR_VNQ),
    ("ICF", NEAR_VNQ),
    ("SRET", NEAR_VNQ),
    ("URE", NEAR_VNQ),
    ("DRN", NEAR_VNQ),
    ("INDS", NEAR_VNQ),
    ("IDGT", NEAR_VNQ),
    ("DFGR", TOO_RECENT),
    ("DFAR", TOO_RECENT),
    ("AVRE", TOO_RECENT),
    // Energy/commodity near-duplicates of XLE
    ("VDE", NEAR_XLE),
    ("FENY", NEAR_XLE),
    ("IYE", NEAR_XLE),
    ("RSPG", NEAR_XLE),
    ("IXC", NEAR_XLE),
    ("IEO", NEAR_XLE),
    ("FILL", NEAR_XLE),
    ("PXI", NEAR_XLE),
    ("FXN", NEAR_XLE),
    ("IEZ", NEAR_XLE),
    ("OIH", NEAR_XLE),
    ("XOP", NEAR_XLE),
    ("ENFR", NEAR_XLE),
    ("UMI", NEAR_XLE),
    ("MLPX", NEAR_XLE),
    ("MLPA", NEAR_XLE),
    ("AMLP", NEAR_XLE),
];
