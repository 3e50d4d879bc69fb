use aquaplan::engine::{analyze, build_plan};
use aquaplan::models::*;
use aquaplan::profile::{EngineProfile, NUSANTARA, SUMBAR};
use speculate2::speculate;

fn input(species: Species, location: Location, capital: i64, risk: RiskProfile) -> PlannerInput {
    PlannerInput {
        species,
        location,
        capital,
        risk,
    }
}

/// A parameter set whose tables have drifted behind the enums: every lookup
/// misses and must fall back to the profile defaults.
fn drifted_profile() -> EngineProfile {
    EngineProfile {
        name: "drifted",
        species_base: &[],
        location_boost: &[],
        risk_adjustment: &[],
        roi_species_base: &[],
        roi_risk_adjustment: &[],
        ..SUMBAR
    }
}

speculate! {
    describe "analyze" {
        it "keeps the score and break-even inside profile bounds for a grid of inputs" {
            for profile in EngineProfile::all() {
                for species in Species::ALL {
                    for location in Location::ALL {
                        for risk in RiskProfile::ALL {
                            for capital in [profile.min_capital, 2_500, 5_000, 50_000, 10_000_000] {
                                let summary = analyze(profile, &input(species, location, capital, risk));
                                assert!(
                                    summary.viability_score >= profile.score_floor
                                        && summary.viability_score <= profile.score_ceiling,
                                    "score {} out of range for {}",
                                    summary.viability_score,
                                    profile.name
                                );
                                assert!(summary.roi_months >= profile.roi_floor);
                            }
                        }
                    }
                }
            }
        }

        it "clamps at the ceiling for the strongest inputs" {
            // Tilapia base 70 + Pesisir Selatan boost 9 + max capital boost 15
            // + aggressive 8 = 102, clamped to 95.
            let summary = analyze(
                &SUMBAR,
                &input(Species::Tilapia, Location::PesisirSelatan, 50_000, RiskProfile::Aggressive),
            );
            assert_eq!(summary.viability_score, SUMBAR.score_ceiling);

            let summary = analyze(
                &NUSANTARA,
                &input(Species::Tilapia, Location::PesisirSelatan, 1_000_000, RiskProfile::Aggressive),
            );
            assert_eq!(summary.viability_score, NUSANTARA.score_ceiling);
        }

        it "is deterministic for identical input" {
            let request = input(Species::Catfish, Location::Agam, 4_250, RiskProfile::Conservative);
            assert_eq!(analyze(&SUMBAR, &request), analyze(&SUMBAR, &request));
        }

        it "never drops the capital boost as capital grows" {
            let mut previous = 0;
            for capital in (0..=40_000).step_by(250) {
                let boost = SUMBAR.capital_boost(capital);
                assert!(boost >= previous, "boost fell from {previous} to {boost} at ${capital}");
                assert!(boost <= SUMBAR.capital_boost_max);
                previous = boost;
            }
            assert_eq!(previous, SUMBAR.capital_boost_max);
        }

        it "falls back to defaults when a key is missing from the tables" {
            let drifted = drifted_profile();
            let summary = analyze(
                &drifted,
                &input(Species::Tilapia, Location::PesisirSelatan, 5_000, RiskProfile::Moderate),
            );

            // base default 60 + location default 5 + capital boost 2 + risk default 0
            assert_eq!(summary.viability_score, 67);
            assert_eq!(summary.roi_months, drifted.roi_species_default);
        }

        it "derives the outlook band from score thresholds" {
            let strong = analyze(
                &SUMBAR,
                &input(Species::Tilapia, Location::PesisirSelatan, 50_000, RiskProfile::Aggressive),
            );
            assert_eq!(strong.outlook, FeasibilityBand::High);
            assert_eq!(strong.notes, FeasibilityBand::High.notes());

            let weak = analyze(
                &SUMBAR,
                &input(Species::Gourami, Location::Pasaman, 1_000, RiskProfile::Conservative),
            );
            // 60 + 4 + 0 - 4 = 60, inside the workable band.
            assert_eq!(weak.outlook, FeasibilityBand::Workable);
        }

        it "keys regional potential off the location" {
            let coastal = analyze(
                &SUMBAR,
                &input(Species::Catfish, Location::PesisirSelatan, 5_000, RiskProfile::Moderate),
            );
            assert_eq!(coastal.regional_potential, RegionalPotential::ExportCorridor);

            let capital_city = analyze(
                &SUMBAR,
                &input(Species::Catfish, Location::Padang, 5_000, RiskProfile::Moderate),
            );
            assert_eq!(capital_city.regional_potential, RegionalPotential::UrbanDemand);

            let inland = analyze(
                &SUMBAR,
                &input(Species::Catfish, Location::Solok, 5_000, RiskProfile::Moderate),
            );
            assert_eq!(inland.regional_potential, RegionalPotential::StableNetwork);
        }

        it "adjusts break-even by risk and capital size, floored at the minimum" {
            // Gourami 12 + conservative 2 + low capital 2 = 16.
            let stretched = analyze(
                &SUMBAR,
                &input(Species::Gourami, Location::Solok, 1_000, RiskProfile::Conservative),
            );
            assert_eq!(stretched.roi_months, 16);

            // Catfish 9 + aggressive -2 + high capital -2 = 5, floored at 6.
            let floored = analyze(
                &SUMBAR,
                &input(Species::Catfish, Location::Solok, 9_000, RiskProfile::Aggressive),
            );
            assert_eq!(floored.roi_months, SUMBAR.roi_floor);
        }
    }

    describe "build_plan" {
        it "reconciles the capital partition exactly" {
            for profile in EngineProfile::all() {
                for capital in [profile.min_capital, 5_417, 10_001, 999_983, 12_345_679] {
                    let request = input(Species::Tilapia, Location::Padang, capital, RiskProfile::Moderate);
                    let summary = analyze(profile, &request);
                    let plan = build_plan(profile, &request, &summary);

                    let f = plan.financials;
                    assert_eq!(
                        f.seed_stock + f.infrastructure + f.feed + f.reserve,
                        capital,
                        "partition leaked money for {} at ${capital}",
                        profile.name
                    );
                    assert!(f.reserve >= 0);
                }
            }
        }

        it "carries break-even verbatim from the summary" {
            let request = input(Species::Gourami, Location::Agam, 2_000, RiskProfile::Conservative);
            let summary = analyze(&SUMBAR, &request);
            let plan = build_plan(&SUMBAR, &request, &summary);

            assert_eq!(plan.financials.roi_months, summary.roi_months);
        }

        it "is deterministic for the same input and summary" {
            let request = input(Species::Catfish, Location::Pariaman, 7_300, RiskProfile::Aggressive);
            let summary = analyze(&SUMBAR, &request);

            assert_eq!(
                build_plan(&SUMBAR, &request, &summary),
                build_plan(&SUMBAR, &request, &summary)
            );
        }

        it "interpolates species and location into the roadmap" {
            let request = input(Species::Gourami, Location::TanahDatar, 5_000, RiskProfile::Moderate);
            let summary = analyze(&SUMBAR, &request);
            let plan = build_plan(&SUMBAR, &request, &summary);

            assert_eq!(plan.phases.len(), 5);
            assert!(plan.phases[0].detail.contains("Tanah Datar"));
            assert!(plan.phases[2].detail.contains("gourami"));
            assert!(plan.phases[4].detail.contains("Tanah Datar"));
        }

        it "pins hatchery and feed suppliers to the chosen location" {
            let request = input(Species::Tilapia, Location::Solok, 5_000, RiskProfile::Moderate);
            let summary = analyze(&SUMBAR, &request);
            let plan = build_plan(&SUMBAR, &request, &summary);

            assert_eq!(plan.suppliers.len(), 4);
            assert_eq!(plan.suppliers[0].category, SupplierCategory::Hatchery);
            assert_eq!(plan.suppliers[0].city, Location::Solok);
            assert_eq!(plan.suppliers[1].category, SupplierCategory::Feed);
            assert_eq!(plan.suppliers[1].city, Location::Solok);
            // Reference cities are fixed regardless of the chosen location.
            assert_eq!(plan.suppliers[2].city, Location::Padang);
            assert_eq!(plan.suppliers[3].city, Location::Bukittinggi);
        }

        it "scales monthly revenue with the viability score" {
            let capital = 6_000;
            let modest = input(Species::Gourami, Location::Pasaman, capital, RiskProfile::Conservative);
            let strong = input(Species::Tilapia, Location::PesisirSelatan, capital, RiskProfile::Aggressive);

            let modest_summary = analyze(&SUMBAR, &modest);
            let strong_summary = analyze(&SUMBAR, &strong);
            assert!(strong_summary.viability_score > modest_summary.viability_score);

            let modest_plan = build_plan(&SUMBAR, &modest, &modest_summary);
            let strong_plan = build_plan(&SUMBAR, &strong, &strong_summary);

            assert!(strong_plan.financials.monthly_revenue > modest_plan.financials.monthly_revenue);
            // Cost is a flat fraction of capital, independent of the score.
            assert_eq!(
                strong_plan.financials.monthly_cost,
                modest_plan.financials.monthly_cost
            );
        }

        it "computes monthly profit as revenue minus cost" {
            let request = input(Species::Catfish, Location::Padang, 8_000, RiskProfile::Moderate);
            let summary = analyze(&SUMBAR, &request);
            let f = build_plan(&SUMBAR, &request, &summary).financials;

            assert_eq!(f.monthly_profit, f.monthly_revenue - f.monthly_cost);
        }
    }

    describe "profiles" {
        it "resolves built-in profiles by name" {
            assert_eq!(EngineProfile::by_name("sumbar").expect("sumbar profile").name, "sumbar");
            assert_eq!(
                EngineProfile::by_name("nusantara").expect("nusantara profile").name,
                "nusantara"
            );
            assert!(EngineProfile::by_name("atlantis").is_none());
        }

        it "keeps every built-in profile internally consistent" {
            for profile in EngineProfile::all() {
                assert!(profile.score_floor < profile.score_ceiling, "{}", profile.name);
                assert!(profile.band_workable_min < profile.band_high_min, "{}", profile.name);
                assert!(profile.band_high_min <= profile.score_ceiling, "{}", profile.name);
                assert!(profile.capital_boost_step > 0, "{}", profile.name);
                assert!(profile.capital_boost_max >= 0, "{}", profile.name);
                assert!(profile.roi_floor > 0, "{}", profile.name);
                assert!(profile.min_capital > 0, "{}", profile.name);
                assert!(
                    profile.seed_pct + profile.infrastructure_pct + profile.feed_pct <= 100,
                    "allocation percentages exceed capital for {}",
                    profile.name
                );
            }
        }
    }
}
