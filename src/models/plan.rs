use serde::{Deserialize, Serialize};

use super::input::Location;

/// One step of the roadmap, in execution order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanPhase {
    pub title: String,
    pub detail: String,
}

/// The kind of input or service a supplier provides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupplierCategory {
    Hatchery,
    Feed,
    Equipment,
    Veterinary,
}

impl SupplierCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hatchery => "hatchery",
            Self::Feed => "feed",
            Self::Equipment => "equipment",
            Self::Veterinary => "veterinary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Hatchery => "Hatchery",
            Self::Feed => "Feed supplier",
            Self::Equipment => "Equipment",
            Self::Veterinary => "Veterinary & Lab",
        }
    }
}

/// A directory entry for a recommended supplier.
///
/// Hatchery and feed suppliers are placed at the operator's chosen location;
/// equipment and veterinary entries sit at fixed reference cities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Supplier {
    pub name: String,
    pub category: SupplierCategory,
    pub city: Location,
    pub contact: String,
}

/// Capital allocation and monthly projections, in whole US dollars.
///
/// The four capital buckets reconcile exactly: `seed_stock + infrastructure
/// + feed + reserve == capital`. Reserve is the remainder term, so integer
/// truncation in the percentage buckets can never leak money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Financials {
    pub seed_stock: i64,
    pub infrastructure: i64,
    pub feed: i64,
    pub reserve: i64,
    pub monthly_revenue: i64,
    pub monthly_cost: i64,
    pub monthly_profit: i64,
    /// Carried verbatim from the feasibility summary; the plan builder never
    /// recomputes ROI.
    pub roi_months: i64,
}

/// The full actionable plan generated after the operator approves a summary.
///
/// Derived from one (input, summary) pair; `PlannerSession` guarantees both
/// come from the same analysis cycle. Rebuilding from the same pair yields
/// an identical plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetailedPlan {
    pub location: Location,
    pub phases: Vec<PlanPhase>,
    pub suppliers: Vec<Supplier>,
    pub financials: Financials,
    pub risk_mitigations: Vec<String>,
}
