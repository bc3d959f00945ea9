//! `careernav-projection`
//!
//! **Responsibility:** Monte Carlo earnings projection and the statistics a
//! caller derives from it.
//!
//! - Randomness is always injected (`rand::Rng`); nothing here reads global RNG state
//!   except `ProjectionRunner::run` when a request carries no seed, and even then
//!   the chosen seed is reported back.
//! - Results are read-only snapshots; nothing is persisted.

pub mod job;
pub mod projector;
pub mod result;
pub mod runner;
pub mod statistics;

pub use job::{CareerProjectionJob, SimulationJob};
pub use projector::{CompoundingMode, GrowthModel, ProjectionSettings, project};
pub use result::{CareerProjection, ProjectionError, ProjectionResult};
pub use runner::{ComparisonSummary, ProjectionReport, ProjectionRequest, ProjectionRunner};
pub use statistics::{DistributionSummary, HistogramBin, Percentiles, histogram, median, summarize};
