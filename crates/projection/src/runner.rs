use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use careernav_careers::{
    CareerScores, CareerSelection, ComparisonMatrix, PivotEdge, career_scores, pairwise_comparison,
    pivot_edges,
};
use careernav_core::RunId;

use crate::job::{CareerProjectionJob, SimulationJob};
use crate::projector::ProjectionSettings;
use crate::result::{CareerProjection, ProjectionError};

/// Upper bound on `simulation_count` unless overridden.
pub const DEFAULT_MAX_SIMULATIONS: usize = 100_000;

/// Upper bound on `year_count` unless overridden.
pub const DEFAULT_MAX_YEARS: u32 = 100;

/// Everything needed to evaluate one run, passed in explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub careers: CareerSelection,

    #[serde(flatten)]
    pub settings: ProjectionSettings,

    /// Seed for the run's generator; a fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ProjectionRequest {
    pub fn new(careers: CareerSelection) -> Self {
        Self {
            careers,
            settings: ProjectionSettings::default(),
            seed: None,
        }
    }

    pub fn with_settings(mut self, settings: ProjectionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Scores and comparison matrix, only meaningful for two or more careers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub scores: Vec<CareerScores>,
    pub matrix: ComparisonMatrix,
}

impl ComparisonSummary {
    pub fn for_selection(selection: &CareerSelection) -> Option<Self> {
        if selection.len() < 2 {
            return None;
        }
        Some(Self {
            scores: career_scores(selection),
            matrix: pairwise_comparison(selection),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub run_id: RunId,
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces this report; `None` when the caller supplied the generator.
    pub seed: Option<u64>,
    pub settings: ProjectionSettings,
    pub careers: Vec<CareerProjection>,
    pub comparison: Option<ComparisonSummary>,
    pub pivots: Vec<PivotEdge>,
}

impl ProjectionReport {
    pub fn career(&self, name: &str) -> Option<&CareerProjection> {
        self.careers.iter().find(|c| c.result.career_name == name)
    }
}

/// Runs projection requests synchronously, in-process.
///
/// Careers are simulated in selection order from a single generator stream.
#[derive(Debug, Copy, Clone)]
pub struct ProjectionRunner {
    max_simulations: usize,
    max_years: u32,
}

impl Default for ProjectionRunner {
    fn default() -> Self {
        Self {
            max_simulations: DEFAULT_MAX_SIMULATIONS,
            max_years: DEFAULT_MAX_YEARS,
        }
    }
}

impl ProjectionRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_simulations(mut self, max_simulations: usize) -> Self {
        self.max_simulations = max_simulations;
        self
    }

    pub fn with_max_years(mut self, max_years: u32) -> Self {
        self.max_years = max_years;
        self
    }

    /// Run with a `StdRng` seeded from the request (or a fresh seed).
    pub fn run(&self, request: &ProjectionRequest) -> Result<ProjectionReport, ProjectionError> {
        let seed = request.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        self.execute(request, Some(seed), &mut rng)
    }

    /// Run with a caller-supplied generator; the report carries no seed.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        request: &ProjectionRequest,
        rng: &mut R,
    ) -> Result<ProjectionReport, ProjectionError> {
        self.execute(request, None, rng)
    }

    fn execute<R: Rng + ?Sized>(
        &self,
        request: &ProjectionRequest,
        seed: Option<u64>,
        rng: &mut R,
    ) -> Result<ProjectionReport, ProjectionError> {
        let run_id = RunId::new();
        let _span = tracing::info_span!(
            "projection.run",
            run_id = %run_id,
            seed = ?seed,
            careers = request.careers.len()
        )
        .entered();

        let settings = &request.settings;
        let mut careers = Vec::with_capacity(request.careers.len());

        // Empty selection is a no-op, not an error.
        if !request.careers.is_empty() {
            settings.validate()?;
            if settings.simulation_count > self.max_simulations {
                return Err(ProjectionError::InvalidInput(format!(
                    "simulation_count {} exceeds the limit of {}",
                    settings.simulation_count, self.max_simulations
                )));
            }
            if settings.year_count > self.max_years {
                return Err(ProjectionError::InvalidInput(format!(
                    "year_count {} exceeds the limit of {}",
                    settings.year_count, self.max_years
                )));
            }

            for input in &request.careers {
                let job = CareerProjectionJob::new(input.clone()).with_settings(settings.clone());
                let projection = job.run(rng)?;
                tracing::debug!(
                    career = %input.name,
                    median = ?projection.summary.as_ref().map(|s| s.median),
                    "career projected"
                );
                careers.push(projection);
            }
        }

        tracing::info!("projected {} career(s)", careers.len());

        Ok(ProjectionReport {
            run_id,
            generated_at: Utc::now(),
            seed,
            settings: settings.clone(),
            careers,
            comparison: ComparisonSummary::for_selection(&request.careers),
            pivots: pivot_edges(&request.careers),
        })
    }
}
