//! Named engine parameter sets.
//!
//! Every number the heuristic consumes lives here: scoring tables, clamp
//! ranges, capital-boost steps, ROI adjustments, and financial split
//! percentages. The engine itself is pure arithmetic over one
//! [`EngineProfile`], so swapping profiles swaps the whole behavior of the
//! planner without touching engine code.
//!
//! Two profiles ship built in:
//!
//! - `sumbar`: the classic parameter set. Score range [20, 95], capital
//!   minimum $1,000.
//! - `nusantara`: the wide parameter set. Score range [0, 100], capital
//!   minimum $2,000, steeper capital curve and larger seed allocation.
//!
//! Tables are association slices rather than exhaustive matches. A key
//! absent from a table resolves to the table's default value, which keeps
//! enum growth from ever turning into a panic in an older parameter set.

use crate::models::{Location, RiskProfile, Species};

/// A complete, immutable parameter set for the planning engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineProfile {
    pub name: &'static str,

    /// Lowest capital (whole USD) the collector will accept.
    pub min_capital: i64,

    // Viability score
    pub score_floor: i64,
    pub score_ceiling: i64,
    pub species_base: &'static [(Species, i64)],
    pub species_base_default: i64,
    pub location_boost: &'static [(Location, i64)],
    pub location_boost_default: i64,
    /// Capital at which the capital boost starts accruing.
    pub capital_boost_pivot: i64,
    /// Dollars of capital per point of boost.
    pub capital_boost_step: i64,
    /// Ceiling on the capital boost contribution.
    pub capital_boost_max: i64,
    pub risk_adjustment: &'static [(RiskProfile, i64)],

    // Outlook bands, expressed as inclusive lower score bounds.
    pub band_high_min: i64,
    pub band_workable_min: i64,

    // Break-even projection
    pub roi_floor: i64,
    pub roi_species_base: &'static [(Species, i64)],
    pub roi_species_default: i64,
    pub roi_risk_adjustment: &'static [(RiskProfile, i64)],
    /// Capital above this shortens the projection by `roi_capital_high_adjust`.
    pub roi_capital_high_threshold: i64,
    pub roi_capital_high_adjust: i64,
    /// Capital below this lengthens the projection by `roi_capital_low_adjust`.
    pub roi_capital_low_threshold: i64,
    pub roi_capital_low_adjust: i64,

    // Financial allocation, as percentages of capital. The reserve bucket is
    // the remainder, so these three must sum to at most 100.
    pub seed_pct: i64,
    pub infrastructure_pct: i64,
    pub feed_pct: i64,

    // Monthly projections, in basis points of capital.
    /// Revenue accrues this many basis points of capital per score point.
    pub revenue_bp_per_point: i64,
    /// Operating cost as flat basis points of capital.
    pub cost_bp: i64,
}

impl EngineProfile {
    /// Resolve a built-in profile by name.
    pub fn by_name(name: &str) -> Option<&'static EngineProfile> {
        ALL_PROFILES.iter().find(|p| p.name == name)
    }

    /// All built-in profiles, in presentation order.
    pub fn all() -> &'static [EngineProfile] {
        ALL_PROFILES
    }

    pub fn species_base(&self, species: Species) -> i64 {
        lookup(self.species_base, species, self.species_base_default)
    }

    pub fn location_boost(&self, location: Location) -> i64 {
        lookup(self.location_boost, location, self.location_boost_default)
    }

    /// Monotone step function of capital, clamped to `[0, capital_boost_max]`.
    pub fn capital_boost(&self, capital: i64) -> i64 {
        ((capital - self.capital_boost_pivot) / self.capital_boost_step)
            .clamp(0, self.capital_boost_max)
    }

    pub fn risk_adjustment(&self, risk: RiskProfile) -> i64 {
        lookup(self.risk_adjustment, risk, 0)
    }

    pub fn roi_species_base(&self, species: Species) -> i64 {
        lookup(self.roi_species_base, species, self.roi_species_default)
    }

    pub fn roi_risk_adjustment(&self, risk: RiskProfile) -> i64 {
        lookup(self.roi_risk_adjustment, risk, 0)
    }
}

/// Single lookup policy for all tables: first match wins, absent keys take
/// the default.
fn lookup<K: PartialEq + Copy>(table: &[(K, i64)], key: K, default: i64) -> i64 {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(default)
}

/// The classic parameter set, matching the original Sumbar deployment.
pub const SUMBAR: EngineProfile = EngineProfile {
    name: "sumbar",
    min_capital: 1_000,

    score_floor: 20,
    score_ceiling: 95,
    species_base: &[
        (Species::Catfish, 65),
        (Species::Tilapia, 70),
        (Species::Gourami, 60),
    ],
    species_base_default: 60,
    location_boost: &[
        (Location::Padang, 8),
        (Location::Bukittinggi, 5),
        (Location::Payakumbuh, 6),
        (Location::Pariaman, 7),
        (Location::Solok, 4),
        (Location::PesisirSelatan, 9),
        (Location::Agam, 5),
        (Location::TanahDatar, 6),
        (Location::Pasaman, 4),
        (Location::LimaPuluhKota, 6),
    ],
    location_boost_default: 5,
    capital_boost_pivot: 3_000,
    capital_boost_step: 1_000,
    capital_boost_max: 15,
    risk_adjustment: &[
        (RiskProfile::Aggressive, 8),
        (RiskProfile::Moderate, 3),
        (RiskProfile::Conservative, -4),
    ],

    band_high_min: 75,
    band_workable_min: 55,

    roi_floor: 6,
    roi_species_base: &[
        (Species::Tilapia, 10),
        (Species::Catfish, 9),
        (Species::Gourami, 12),
    ],
    roi_species_default: 12,
    roi_risk_adjustment: &[
        (RiskProfile::Conservative, 2),
        (RiskProfile::Aggressive, -2),
    ],
    roi_capital_high_threshold: 8_000,
    roi_capital_high_adjust: -2,
    roi_capital_low_threshold: 3_000,
    roi_capital_low_adjust: 2,

    seed_pct: 35,
    infrastructure_pct: 30,
    feed_pct: 20,

    revenue_bp_per_point: 40,
    cost_bp: 1_800,
};

/// The wide parameter set: full percentage score range and a steeper
/// capital curve, tuned for larger ventures.
pub const NUSANTARA: EngineProfile = EngineProfile {
    name: "nusantara",
    min_capital: 2_000,

    score_floor: 0,
    score_ceiling: 100,
    species_base: &[
        (Species::Catfish, 62),
        (Species::Tilapia, 68),
        (Species::Gourami, 55),
    ],
    species_base_default: 55,
    location_boost: &[
        (Location::Padang, 10),
        (Location::Bukittinggi, 6),
        (Location::Payakumbuh, 7),
        (Location::Pariaman, 8),
        (Location::Solok, 5),
        (Location::PesisirSelatan, 11),
        (Location::Agam, 6),
        (Location::TanahDatar, 7),
        (Location::Pasaman, 5),
        (Location::LimaPuluhKota, 7),
    ],
    location_boost_default: 6,
    capital_boost_pivot: 2_000,
    capital_boost_step: 1_500,
    capital_boost_max: 20,
    risk_adjustment: &[
        (RiskProfile::Aggressive, 10),
        (RiskProfile::Moderate, 4),
        (RiskProfile::Conservative, -6),
    ],

    band_high_min: 80,
    band_workable_min: 60,

    roi_floor: 6,
    roi_species_base: &[
        (Species::Tilapia, 11),
        (Species::Catfish, 10),
        (Species::Gourami, 13),
    ],
    roi_species_default: 13,
    roi_risk_adjustment: &[
        (RiskProfile::Conservative, 3),
        (RiskProfile::Aggressive, -2),
    ],
    roi_capital_high_threshold: 10_000,
    roi_capital_high_adjust: -2,
    roi_capital_low_threshold: 4_000,
    roi_capital_low_adjust: 2,

    seed_pct: 40,
    infrastructure_pct: 25,
    feed_pct: 20,

    revenue_bp_per_point: 45,
    cost_bp: 2_000,
};

static ALL_PROFILES: &[EngineProfile] = &[SUMBAR, NUSANTARA];
