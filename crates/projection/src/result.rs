use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::statistics::DistributionSummary;

/// Simulated earnings for one career.
///
/// `trajectory` holds one value per simulated path, in draw order (never sorted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub career_name: String,
    pub trajectory: Vec<f64>,
}

impl ProjectionResult {
    pub fn new(career_name: impl Into<String>, trajectory: Vec<f64>) -> Self {
        Self {
            career_name: career_name.into(),
            trajectory,
        }
    }

    pub fn simulation_count(&self) -> usize {
        self.trajectory.len()
    }
}

/// A projection plus the statistics shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProjection {
    #[serde(flatten)]
    pub result: ProjectionResult,

    /// `None` only when the trajectory is empty.
    pub summary: Option<DistributionSummary>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("invalid projection input: {0}")]
    InvalidInput(String),

    #[error("invalid growth distribution: {0}")]
    Distribution(String),
}

impl ProjectionError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
