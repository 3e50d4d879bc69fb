use serde::{Deserialize, Serialize};

use super::input::Location;

/// Market-side outlook for the chosen region.
///
/// Derived from the location alone; the descriptive text is what the
/// presentation layer shows under "Regional potential".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RegionalPotential {
    /// Coastal districts with established outbound logistics.
    ExportCorridor,
    /// Provincial capital demand and distribution density.
    UrbanDemand,
    /// Inland districts with steady local buyer networks.
    StableNetwork,
}

impl RegionalPotential {
    pub fn for_location(location: Location) -> Self {
        match location {
            Location::PesisirSelatan => Self::ExportCorridor,
            Location::Padang => Self::UrbanDemand,
            _ => Self::StableNetwork,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ExportCorridor => "Strong export channels via coastal logistics",
            Self::UrbanDemand => "High local demand and accessible distribution hubs",
            Self::StableNetwork => "Stable buyer network and input availability",
        }
    }
}

/// Qualitative band the viability score falls into.
///
/// Band thresholds are profile configuration, not properties of the band
/// itself: the same score can land in different bands under different
/// parameter sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityBand {
    High,
    Workable,
    Marginal,
}

impl FeasibilityBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Workable => "workable",
            Self::Marginal => "marginal",
        }
    }

    /// Operator-facing note for this band.
    pub fn notes(&self) -> &'static str {
        match self {
            Self::High => "High feasibility with robust operational outlook.",
            Self::Workable => "Feasible with targeted optimizations.",
            Self::Marginal => "Proceed cautiously; consider boosting capital or adjusting risk.",
        }
    }
}

/// The analyzer's verdict on a planning request.
///
/// Derived deterministically and solely from one `PlannerInput` under one
/// named profile. Never mutated after creation; a new submission produces
/// a new summary, replacing the old one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeasibilitySummary {
    /// Composite score, clamped into the profile's `[floor, ceiling]` range.
    pub viability_score: i64,
    pub regional_potential: RegionalPotential,
    pub outlook: FeasibilityBand,
    /// Text form of `outlook`, kept on the record for serialized consumers.
    pub notes: String,
    /// Estimated months to break even, never below the profile floor.
    pub roi_months: i64,
}
