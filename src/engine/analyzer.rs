//! Feasibility scoring.

use tracing::debug;

use crate::models::{FeasibilityBand, FeasibilitySummary, PlannerInput, RegionalPotential};
use crate::profile::EngineProfile;

/// Score a planning request.
///
/// The viability score is the sum of four terms, each read from the
/// profile, then clamped into the profile's score range:
///
/// 1. species base
/// 2. location boost
/// 3. capital boost (monotone step function, clamped to its own ceiling)
/// 4. risk adjustment (signed)
///
/// The break-even projection is derived independently of the score: a
/// species base duration, lengthened or shortened by risk profile and by
/// capital size, floored at the profile minimum.
pub fn analyze(profile: &EngineProfile, input: &PlannerInput) -> FeasibilitySummary {
    let base = profile.species_base(input.species);
    let location_boost = profile.location_boost(input.location);
    let capital_boost = profile.capital_boost(input.capital);
    let risk_adjustment = profile.risk_adjustment(input.risk);

    let viability_score = (base + location_boost + capital_boost + risk_adjustment)
        .clamp(profile.score_floor, profile.score_ceiling);

    debug!(
        profile = profile.name,
        base,
        location_boost,
        capital_boost,
        risk_adjustment,
        viability_score,
        "scored planning request"
    );

    let outlook = band_for_score(profile, viability_score);

    FeasibilitySummary {
        viability_score,
        regional_potential: RegionalPotential::for_location(input.location),
        outlook,
        notes: outlook.notes().to_string(),
        roi_months: roi_months(profile, input),
    }
}

fn band_for_score(profile: &EngineProfile, score: i64) -> FeasibilityBand {
    if score >= profile.band_high_min {
        FeasibilityBand::High
    } else if score >= profile.band_workable_min {
        FeasibilityBand::Workable
    } else {
        FeasibilityBand::Marginal
    }
}

/// Months to break even. Conservative operators stretch the projection,
/// aggressive ones compress it; unusually large or small capital shifts it
/// again. Never below the profile floor.
fn roi_months(profile: &EngineProfile, input: &PlannerInput) -> i64 {
    let base = profile.roi_species_base(input.species);
    let risk = profile.roi_risk_adjustment(input.risk);
    let capital = if input.capital > profile.roi_capital_high_threshold {
        profile.roi_capital_high_adjust
    } else if input.capital < profile.roi_capital_low_threshold {
        profile.roi_capital_low_adjust
    } else {
        0
    };

    (base + risk + capital).max(profile.roi_floor)
}
