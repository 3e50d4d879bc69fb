//! The planner session and its approval gate.
//!
//! A session owns all transient state for one operator: the current
//! analysis cycle and, once approved, the detailed plan. Sessions move
//! through three stages:
//!
//! ```text
//! Idle --submit--> Analyzed --approve--> Planned
//!   ^                  |  ^                 |
//!   +------reset-------+  +----submit-------+   (reset from any stage)
//! ```
//!
//! The stage machine is what makes "a plan derives from the summary of the
//! same input snapshot" structural: a plan can only be built from the cycle
//! the session currently holds, and submitting replaces that cycle
//! wholesale, atomically discarding any plan built from the old one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::engine;
use crate::models::{DetailedPlan, FeasibilitySummary, PlannerInput};
use crate::profile::EngineProfile;

/// Why a session transition was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("nothing to approve; submit a planning request first")]
    NothingToApprove,
}

/// One submit-to-reset derivation chain.
///
/// Cycles are **ephemeral**, living only inside a session. The id ties a
/// summary (and any plan built from it) to the exact input snapshot it was
/// derived from; a new submission always mints a new cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisCycle {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub input: PlannerInput,
    pub summary: FeasibilitySummary,
}

#[derive(Debug)]
enum Stage {
    Idle,
    Analyzed(AnalysisCycle),
    Planned(AnalysisCycle, DetailedPlan),
}

/// Session-scoped planner state for a single operator.
///
/// Single-threaded by construction: every transition runs to completion
/// before control returns, so there is never work in flight to cancel.
/// Reset simply discards derived state.
#[derive(Debug)]
pub struct PlannerSession {
    profile: &'static EngineProfile,
    stage: Stage,
}

impl PlannerSession {
    pub fn new(profile: &'static EngineProfile) -> Self {
        Self {
            profile,
            stage: Stage::Idle,
        }
    }

    pub fn profile(&self) -> &'static EngineProfile {
        self.profile
    }

    /// Submit a validated planning request, replacing any previous cycle.
    ///
    /// Runs the analyzer synchronously and moves the session to Analyzed.
    /// Any plan derived from an earlier cycle is discarded in the same
    /// transition.
    pub fn submit(&mut self, input: PlannerInput) -> &FeasibilitySummary {
        let cycle = AnalysisCycle {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            summary: engine::analyze(self.profile, &input),
            input,
        };
        debug!(cycle = %cycle.id, score = cycle.summary.viability_score, "analysis cycle opened");

        self.stage = Stage::Analyzed(cycle);
        self.summary().expect("just analyzed")
    }

    /// Approve the current summary and build the detailed plan.
    ///
    /// From Analyzed this moves to Planned. Approving again while Planned
    /// rebuilds the plan from the same cycle, which yields an identical
    /// plan. Approving an idle session is an error: there is nothing to
    /// approve.
    pub fn approve(&mut self) -> Result<&DetailedPlan, SessionError> {
        let stage = std::mem::replace(&mut self.stage, Stage::Idle);
        let cycle = match stage {
            Stage::Idle => return Err(SessionError::NothingToApprove),
            Stage::Analyzed(cycle) => cycle,
            Stage::Planned(cycle, _) => cycle,
        };

        let plan = engine::build_plan(self.profile, &cycle.input, &cycle.summary);
        debug!(cycle = %cycle.id, "plan approved and built");

        self.stage = Stage::Planned(cycle, plan);
        Ok(self.plan().expect("just planned"))
    }

    /// Discard all derived state and return to Idle.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.stage = Stage::Idle;
    }

    pub fn cycle(&self) -> Option<&AnalysisCycle> {
        match &self.stage {
            Stage::Idle => None,
            Stage::Analyzed(cycle) | Stage::Planned(cycle, _) => Some(cycle),
        }
    }

    pub fn input(&self) -> Option<&PlannerInput> {
        self.cycle().map(|c| &c.input)
    }

    pub fn summary(&self) -> Option<&FeasibilitySummary> {
        self.cycle().map(|c| &c.summary)
    }

    pub fn plan(&self) -> Option<&DetailedPlan> {
        match &self.stage {
            Stage::Planned(_, plan) => Some(plan),
            _ => None,
        }
    }
}
