//! Plain-text rendering of summaries and plans.
//!
//! Pure string builders consumed by the CLI; nothing here touches engine
//! state. Currency is US dollars with no fractional digits, matching the
//! figures the engine produces.

use crate::models::{DetailedPlan, FeasibilitySummary};

const METER_WIDTH: i64 = 20;
const METER_FILLED: char = '█';
const METER_EMPTY: char = '░';

/// Format whole US dollars with thousands separators.
///
/// Example output: `$5,000`, `-$1,250,000`.
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Render a percentage-like score as a terminal meter.
///
/// Example output: `[██████████░░░░░░░░░░] 50%`
pub fn score_meter(score: i64) -> String {
    let filled = (score * METER_WIDTH / 100).clamp(0, METER_WIDTH);
    let mut bar = String::new();
    for i in 0..METER_WIDTH {
        bar.push(if i < filled { METER_FILLED } else { METER_EMPTY });
    }
    format!("[{bar}] {score}%")
}

/// Render a feasibility summary for terminal display.
pub fn render_summary(summary: &FeasibilitySummary) -> String {
    let mut output = String::new();
    output.push_str("Feasibility snapshot\n");
    output.push_str(&format!(
        "  Viability score     {}\n",
        score_meter(summary.viability_score)
    ));
    output.push_str(&format!("  Notes               {}\n", summary.notes));
    output.push_str(&format!(
        "  Regional potential  {}\n",
        summary.regional_potential.description()
    ));
    output.push_str(&format!(
        "  Projected ROI       {} months\n",
        summary.roi_months
    ));
    output
}

/// Render a detailed plan for terminal display.
pub fn render_plan(plan: &DetailedPlan) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Actionable business plan ({})\n",
        plan.location.display_name()
    ));

    output.push_str("\nPhase-by-phase roadmap\n");
    for (i, phase) in plan.phases.iter().enumerate() {
        output.push_str(&format!("  {}. {}: {}\n", i + 1, phase.title, phase.detail));
    }

    output.push_str("\nLocal suppliers\n");
    for supplier in &plan.suppliers {
        output.push_str(&format!(
            "  - {} ({}, {}) {}\n",
            supplier.name,
            supplier.category.display_name(),
            supplier.city.display_name(),
            supplier.contact
        ));
    }

    let f = &plan.financials;
    output.push_str("\nFinancial breakdown\n");
    output.push_str(&format!("  Seed stock       {}\n", format_usd(f.seed_stock)));
    output.push_str(&format!(
        "  Infrastructure   {}\n",
        format_usd(f.infrastructure)
    ));
    output.push_str(&format!("  Feed             {}\n", format_usd(f.feed)));
    output.push_str(&format!("  Reserve          {}\n", format_usd(f.reserve)));
    output.push_str(&format!(
        "  Monthly revenue  {}\n",
        format_usd(f.monthly_revenue)
    ));
    output.push_str(&format!(
        "  Monthly cost     {}\n",
        format_usd(f.monthly_cost)
    ));
    output.push_str(&format!(
        "  Monthly profit   {}\n",
        format_usd(f.monthly_profit)
    ));
    output.push_str(&format!("  Break-even       {} months\n", f.roi_months));

    output.push_str("\nRisk mitigation\n");
    for risk in &plan.risk_mitigations {
        output.push_str(&format!("  - {risk}\n"));
    }

    output
}
