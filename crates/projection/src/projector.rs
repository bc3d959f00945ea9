use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use careernav_core::{AnnualEarnings, RiskLevel};

use crate::result::ProjectionError;
use crate::statistics::DEFAULT_BINS;

/// How sampled growth rates turn into a final earnings value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundingMode {
    /// One growth draw per path, applied once. `year_count` is validated but unused.
    #[default]
    SingleStep,
    /// `year_count` independent draws per path, compounded sequentially.
    PerYear,
}

/// Normal annual growth model, dampened by risk.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthModel {
    pub mean: f64,
    pub std_dev: f64,
    pub compounding: CompoundingMode,
}

impl Default for GrowthModel {
    fn default() -> Self {
        Self {
            mean: 0.05,
            std_dev: 0.02,
            compounding: CompoundingMode::SingleStep,
        }
    }
}

impl GrowthModel {
    fn distribution(&self) -> Result<Normal<f64>, ProjectionError> {
        if !self.mean.is_finite() {
            return Err(ProjectionError::Distribution(
                "growth mean must be finite".to_string(),
            ));
        }
        Normal::new(self.mean, self.std_dev)
            .map_err(|e| ProjectionError::Distribution(format!("{e} (std_dev={})", self.std_dev)))
    }
}

/// Run-wide knobs shared by every career in a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub simulation_count: usize,
    pub year_count: u32,
    #[serde(flatten)]
    pub growth: GrowthModel,
    pub histogram_bins: usize,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            simulation_count: 1000,
            year_count: 10,
            growth: GrowthModel::default(),
            histogram_bins: DEFAULT_BINS,
        }
    }
}

impl ProjectionSettings {
    pub fn with_simulation_count(mut self, simulation_count: usize) -> Self {
        self.simulation_count = simulation_count;
        self
    }

    pub fn with_year_count(mut self, year_count: u32) -> Self {
        self.year_count = year_count;
        self
    }

    pub fn with_compounding(mut self, compounding: CompoundingMode) -> Self {
        self.growth.compounding = compounding;
        self
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.simulation_count == 0 {
            return Err(ProjectionError::invalid_input("simulation_count must be > 0"));
        }
        if self.year_count == 0 {
            return Err(ProjectionError::invalid_input("year_count must be > 0"));
        }
        if self.histogram_bins == 0 {
            return Err(ProjectionError::invalid_input("histogram_bins must be > 0"));
        }
        self.growth.distribution().map(|_| ())
    }
}

/// Simulate `simulation_count` earnings outcomes for one career.
///
/// Each path draws a growth rate `g ~ Normal(mean, std_dev)` and yields
/// `base * (1 + g * (1 - risk/10))`; with `PerYear` compounding the factor is
/// multiplied over `year_count` independent draws. Values are returned in draw
/// order and are not clamped, so a sufficiently negative draw can go below zero.
pub fn project<R: Rng + ?Sized>(
    base_earning: AnnualEarnings,
    risk_level: RiskLevel,
    simulation_count: usize,
    year_count: u32,
    model: &GrowthModel,
    rng: &mut R,
) -> Result<Vec<f64>, ProjectionError> {
    if simulation_count == 0 {
        return Err(ProjectionError::invalid_input("simulation_count must be > 0"));
    }
    if year_count == 0 {
        return Err(ProjectionError::invalid_input("year_count must be > 0"));
    }

    let growth = model.distribution()?;
    let base = base_earning.amount();
    let adjustment = risk_level.adjustment();

    let trajectory = match model.compounding {
        CompoundingMode::SingleStep => (0..simulation_count)
            .map(|_| base * (1.0 + growth.sample(rng) * adjustment))
            .collect(),
        CompoundingMode::PerYear => (0..simulation_count)
            .map(|_| {
                (0..year_count).fold(base, |acc, _| acc * (1.0 + growth.sample(rng) * adjustment))
            })
            .collect(),
    };

    Ok(trajectory)
}
