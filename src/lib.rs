//! AquaPlan: feasibility scoring and venture planning for small-scale fish
//! farming.
//!
//! The crate is a deterministic planning engine plus the thin surfaces
//! around it. A planning request flows through a fixed pipeline:
//!
//! ```text
//! collector (validate) -> analyzer -> approval gate -> plan builder -> render
//! ```
//!
//! - [`collector`]: the validation boundary; raw form values in, a
//!   [`models::PlannerInput`] out, or a rejection before the engine runs.
//! - [`engine`]: the two pure core functions, [`engine::analyze`] and
//!   [`engine::build_plan`].
//! - [`profile`]: named, immutable parameter sets; every constant the
//!   heuristic uses lives there.
//! - [`session`]: the stage machine enforcing the approval gate and the
//!   lifecycle of transient state.
//! - [`render`]: plain-text presentation of the engine's records.
//!
//! Everything is synchronous and single-threaded; the engine performs no
//! I/O and holds no state of its own.

pub mod collector;
pub mod engine;
pub mod models;
pub mod profile;
pub mod render;
pub mod session;
