//! Career catalog, scoring, and guidance.
//!
//! This crate contains deterministic career logic only (no IO, no randomness).
//! Monte Carlo projection lives in `careernav-projection`.

pub mod career;
pub mod comparison;
pub mod guidance;
pub mod scores;

pub use career::{CareerId, CareerInput, CareerSelection};
pub use comparison::{ComparisonCell, ComparisonMatrix, pairwise_comparison};
pub use guidance::{CareerGuidance, PivotEdge, guidance, pivot_edges};
pub use scores::{CareerScores, career_scores, diversification_scores, stability_scores};
