use rand::Rng;

use careernav_careers::CareerInput;

use crate::projector::{ProjectionSettings, project};
use crate::result::{CareerProjection, ProjectionError, ProjectionResult};
use crate::statistics::summarize;

/// A self-contained simulation unit.
///
/// Jobs own their input and draw every random number from the generator they are
/// handed, so the same job with the same seeded generator yields the same output.
pub trait SimulationJob {
    type Input;
    type Output;

    /// The input the job simulates.
    fn input(&self) -> &Self::Input;

    /// Execute the simulation.
    ///
    /// Must not touch global state; all randomness comes from `rng`.
    fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output, ProjectionError>;
}

/// Earnings projection for a single career.
#[derive(Debug, Clone)]
pub struct CareerProjectionJob {
    input: CareerInput,
    settings: ProjectionSettings,
}

impl CareerProjectionJob {
    pub fn new(input: CareerInput) -> Self {
        Self {
            input,
            settings: ProjectionSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ProjectionSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl SimulationJob for CareerProjectionJob {
    type Input = CareerInput;
    type Output = CareerProjection;

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CareerProjection, ProjectionError> {
        self.settings.validate()?;

        let trajectory = project(
            self.input.base_earning,
            self.input.risk_level,
            self.settings.simulation_count,
            self.settings.year_count,
            &self.settings.growth,
            rng,
        )?;
        let summary = summarize(&trajectory, self.settings.histogram_bins);

        Ok(CareerProjection {
            result: ProjectionResult::new(self.input.name.clone(), trajectory),
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careernav_core::{AnnualEarnings, RiskLevel};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn job(name: &str, earning: f64, risk: u8) -> CareerProjectionJob {
        CareerProjectionJob::new(CareerInput::new(
            name,
            AnnualEarnings::new(earning).unwrap(),
            RiskLevel::new(risk).unwrap(),
        ))
    }

    #[test]
    fn job_attaches_summary_to_result() {
        let job = job("Consulting", 120_000.0, 4)
            .with_settings(ProjectionSettings::default().with_simulation_count(500));
        let out = job.run(&mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(out.result.career_name, "Consulting");
        assert_eq!(out.result.simulation_count(), 500);
        let summary = out.summary.unwrap();
        assert_eq!(summary.count, 500);
        assert_eq!(summary.histogram.len(), 30);
        assert_eq!(summary.histogram.iter().map(|b| b.count).sum::<u32>(), 500);
    }

    #[test]
    fn invalid_settings_fail_before_sampling() {
        let job = job("Lecturing", 60_000.0, 2)
            .with_settings(ProjectionSettings::default().with_year_count(0));
        let err = job.run(&mut StdRng::seed_from_u64(12)).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::InvalidInput("year_count must be > 0".to_string())
        );
    }
}
