//! Sparecast core - spare-pool contingency model engine.
//!
//! Estimates, for a redundant equipment fleet protected by a pool of
//! spares, the steady-state probability of running with 0, 1, or >=2
//! failed-and-unreplaced units. The pipeline per spare level:
//! build the transition matrix, solve its stationary distribution,
//! aggregate prefix sums into contingency bands.
//!
//! Every computation is a pure function of `(ModelParameters, spares)`;
//! nothing is cached or shared between calls.

pub mod duration;
pub mod exit_codes;
pub mod logging;
pub mod model;
pub mod params;
pub mod report;

pub use duration::{annualized_rate, DurationUnit};
pub use model::{evaluate, BandProbabilities, SpareLevelOutcome, MAX_SPARES};
pub use params::{ModelInputs, ModelParameters};
pub use report::{Report, SpareLevelRecord};
