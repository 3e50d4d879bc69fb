//! Detailed plan construction.

use tracing::debug;

use crate::models::{
    DetailedPlan, FeasibilitySummary, Financials, Location, PlanPhase, PlannerInput, Supplier,
    SupplierCategory,
};
use crate::profile::EngineProfile;

/// Build the full actionable plan for an approved summary.
///
/// Emits the fixed five-phase roadmap and supplier directory, partitions
/// capital into allocation buckets, and projects monthly cash flow from the
/// viability score. The break-even figure is carried verbatim from the
/// summary; the analyzer is the single source of truth for ROI.
pub fn build_plan(
    profile: &EngineProfile,
    input: &PlannerInput,
    summary: &FeasibilitySummary,
) -> DetailedPlan {
    let financials = allocate(profile, input.capital, summary);

    debug!(
        profile = profile.name,
        capital = input.capital,
        seed_stock = financials.seed_stock,
        reserve = financials.reserve,
        monthly_profit = financials.monthly_profit,
        "built detailed plan"
    );

    DetailedPlan {
        location: input.location,
        phases: phases(input),
        suppliers: suppliers(input),
        financials,
        risk_mitigations: RISK_MITIGATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Partition capital into named buckets and project monthly cash flow.
///
/// The three percentage buckets truncate toward zero; the reserve bucket is
/// defined as the remainder, so the four always sum to exactly `capital`.
fn allocate(profile: &EngineProfile, capital: i64, summary: &FeasibilitySummary) -> Financials {
    let seed_stock = capital * profile.seed_pct / 100;
    let infrastructure = capital * profile.infrastructure_pct / 100;
    let feed = capital * profile.feed_pct / 100;
    let reserve = capital - seed_stock - infrastructure - feed;

    let monthly_revenue = capital * summary.viability_score * profile.revenue_bp_per_point / 10_000;
    let monthly_cost = capital * profile.cost_bp / 10_000;

    Financials {
        seed_stock,
        infrastructure,
        feed,
        reserve,
        monthly_revenue,
        monthly_cost,
        monthly_profit: monthly_revenue - monthly_cost,
        roi_months: summary.roi_months,
    }
}

fn phases(input: &PlannerInput) -> Vec<PlanPhase> {
    let species = input.species.display_name().to_lowercase();
    let location = input.location.display_name();

    vec![
        PlanPhase {
            title: "Site selection & permits".to_string(),
            detail: format!(
                "Confirm land and pond availability in {location}, secure local permits, \
                 and assess water source quality (pH 6.5-8.5, ammonia <0.02 mg/L)."
            ),
        },
        PlanPhase {
            title: "Infrastructure setup".to_string(),
            detail: "Construct or rehabilitate ponds (300-500 m2 each), install aeration and \
                     simple filtration; prepare storage and a biosecurity perimeter."
                .to_string(),
        },
        PlanPhase {
            title: "Sourcing & stocking".to_string(),
            detail: format!(
                "Procure {species} fingerlings from certified hatcheries; stock at recommended \
                 density and acclimate to site conditions."
            ),
        },
        PlanPhase {
            title: "Operations & SOPs".to_string(),
            detail: "Establish the feeding regimen, water testing cadence, and health \
                     monitoring; track FCR and daily mortality."
                .to_string(),
        },
        PlanPhase {
            title: "Go-to-market".to_string(),
            detail: format!(
                "Secure purchase agreements with buyers, restaurants, and markets around \
                 {location}; plan the harvest schedule and cold-chain logistics."
            ),
        },
    ]
}

fn suppliers(input: &PlannerInput) -> Vec<Supplier> {
    vec![
        Supplier {
            name: format!("{} Fingerlings Co.", input.species.display_name()),
            category: SupplierCategory::Hatchery,
            city: input.location,
            contact: "+62 821-XXXX-1111".to_string(),
        },
        Supplier {
            name: "Sumbar AquaFeed".to_string(),
            category: SupplierCategory::Feed,
            city: input.location,
            contact: "+62 822-XXXX-2222".to_string(),
        },
        Supplier {
            name: "Nusantara Water Tech".to_string(),
            category: SupplierCategory::Equipment,
            city: Location::Padang,
            contact: "+62 823-XXXX-3333".to_string(),
        },
        Supplier {
            name: "Vet Ikan Andalas".to_string(),
            category: SupplierCategory::Veterinary,
            city: Location::Bukittinggi,
            contact: "+62 824-XXXX-4444".to_string(),
        },
    ]
}

const RISK_MITIGATIONS: &[&str] = &[
    "Price volatility: lock in forward contracts with regional buyers when possible.",
    "Biosecurity: quarantine new stock, sanitize equipment, control pond access.",
    "Water quality swings: implement weekly testing and backup aeration.",
    "Extreme weather: maintain drainage and emergency feed reserves (2 weeks).",
];
