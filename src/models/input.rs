use serde::{Deserialize, Serialize};

/// Fish species supported by the planner.
///
/// The set is closed: the collector only ever submits one of these values.
/// Scoring tables are still keyed defensively. A species absent from a
/// profile's tables falls back to the profile default rather than erroring,
/// so adding a variant here cannot break older parameter sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Catfish,
    Tilapia,
    Gourami,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Catfish, Species::Tilapia, Species::Gourami];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Catfish => "catfish",
            Self::Tilapia => "tilapia",
            Self::Gourami => "gourami",
        }
    }

    /// Display name for rendered output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Catfish => "Catfish",
            Self::Tilapia => "Tilapia",
            Self::Gourami => "Gourami",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "catfish" => Some(Self::Catfish),
            "tilapia" => Some(Self::Tilapia),
            "gourami" => Some(Self::Gourami),
            _ => None,
        }
    }
}

/// Administrative regions of West Sumatra covered by the planner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Padang,
    Bukittinggi,
    Payakumbuh,
    Pariaman,
    Solok,
    PesisirSelatan,
    Agam,
    TanahDatar,
    Pasaman,
    LimaPuluhKota,
}

impl Location {
    pub const ALL: [Location; 10] = [
        Location::Padang,
        Location::Bukittinggi,
        Location::Payakumbuh,
        Location::Pariaman,
        Location::Solok,
        Location::PesisirSelatan,
        Location::Agam,
        Location::TanahDatar,
        Location::Pasaman,
        Location::LimaPuluhKota,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Padang => "padang",
            Self::Bukittinggi => "bukittinggi",
            Self::Payakumbuh => "payakumbuh",
            Self::Pariaman => "pariaman",
            Self::Solok => "solok",
            Self::PesisirSelatan => "pesisir_selatan",
            Self::Agam => "agam",
            Self::TanahDatar => "tanah_datar",
            Self::Pasaman => "pasaman",
            Self::LimaPuluhKota => "lima_puluh_kota",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Padang => "Padang",
            Self::Bukittinggi => "Bukittinggi",
            Self::Payakumbuh => "Payakumbuh",
            Self::Pariaman => "Pariaman",
            Self::Solok => "Solok",
            Self::PesisirSelatan => "Pesisir Selatan",
            Self::Agam => "Agam",
            Self::TanahDatar => "Tanah Datar",
            Self::Pasaman => "Pasaman",
            Self::LimaPuluhKota => "Lima Puluh Kota",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "padang" => Some(Self::Padang),
            "bukittinggi" => Some(Self::Bukittinggi),
            "payakumbuh" => Some(Self::Payakumbuh),
            "pariaman" => Some(Self::Pariaman),
            "solok" => Some(Self::Solok),
            "pesisir_selatan" => Some(Self::PesisirSelatan),
            "agam" => Some(Self::Agam),
            "tanah_datar" => Some(Self::TanahDatar),
            "pasaman" => Some(Self::Pasaman),
            "lima_puluh_kota" => Some(Self::LimaPuluhKota),
            _ => None,
        }
    }
}

/// Declared risk tolerance of the operator.
///
/// - `Aggressive`: higher nominal score reward, shorter projected break-even
/// - `Moderate`: neutral adjustments
/// - `Conservative`: score penalty, longer projected break-even
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Aggressive,
    Moderate,
    Conservative,
}

impl RiskProfile {
    pub const ALL: [RiskProfile; 3] = [
        RiskProfile::Aggressive,
        RiskProfile::Moderate,
        RiskProfile::Conservative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Moderate => "moderate",
            Self::Conservative => "conservative",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Aggressive => "Aggressive",
            Self::Moderate => "Moderate",
            Self::Conservative => "Conservative",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "aggressive" => Some(Self::Aggressive),
            "moderate" => Some(Self::Moderate),
            "conservative" => Some(Self::Conservative),
            _ => None,
        }
    }
}

/// A validated planning request.
///
/// Front-ends obtain one through the collector (`PlannerForm::validate`),
/// which enforces the profile's capital minimum before the engine ever sees
/// the value. Immutable for the lifetime of one analysis cycle; a new
/// submission replaces it wholesale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannerInput {
    pub species: Species,
    pub location: Location,
    /// Starting capital in whole US dollars.
    pub capital: i64,
    pub risk: RiskProfile,
}
