//! Domain models for AquaPlan.
//!
//! # Core Concepts
//!
//! The engine derives a linear chain of records, each immutable once built:
//!
//! - [`PlannerInput`]: the validated planning request (species, location,
//!   capital, risk profile). Produced by the collector, never by the engine.
//! - [`FeasibilitySummary`]: the analyzer's verdict, from viability score
//!   and regional potential to the projected break-even.
//! - [`DetailedPlan`]: the full roadmap, supplier directory, and financial
//!   allocation. Only generated after the operator approves a summary.
//!
//! All three are ephemeral: they live inside a planner session and are
//! discarded on reset. There is no durable storage.

mod input;
mod plan;
mod summary;

pub use input::*;
pub use plan::*;
pub use summary::*;
