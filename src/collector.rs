//! The input collection boundary.
//!
//! Validation happens here, before the engine is ever invoked. The engine
//! functions are total over validated input and never re-check it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Location, PlannerInput, RiskProfile, Species};
use crate::profile::EngineProfile;

/// Why a submission was rejected at the collector boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("starting capital of at least ${min} is required, got ${got}")]
    CapitalBelowMinimum { min: i64, got: i64 },
}

/// Raw form values as captured by a front-end, not yet validated.
///
/// Field presence is the front-end's problem (the CLI makes every argument
/// required); the collector owns the numeric checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlannerForm {
    pub species: Species,
    pub location: Location,
    /// Starting capital in whole US dollars.
    pub capital: i64,
    pub risk: RiskProfile,
}

impl PlannerForm {
    /// Validate the form against a profile's minimums.
    ///
    /// Capital exactly at the minimum passes; one dollar below blocks the
    /// submission.
    pub fn validate(&self, profile: &EngineProfile) -> Result<PlannerInput, ValidationError> {
        if self.capital < profile.min_capital {
            return Err(ValidationError::CapitalBelowMinimum {
                min: profile.min_capital,
                got: self.capital,
            });
        }

        Ok(PlannerInput {
            species: self.species,
            location: self.location,
            capital: self.capital,
            risk: self.risk,
        })
    }
}
