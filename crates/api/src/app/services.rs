use careernav_projection::{ProjectionReport, ProjectionRequest, ProjectionRunner, ProjectionSettings};

use crate::app::errors::ApiError;
use crate::config::ApiConfig;

/// Shared, immutable handler dependencies.
#[derive(Debug, Clone)]
pub struct AppServices {
    runner: ProjectionRunner,
    defaults: ProjectionSettings,
}

impl AppServices {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            runner: ProjectionRunner::new()
                .with_max_simulations(config.max_simulations)
                .with_max_years(config.max_years),
            defaults: config.defaults.clone(),
        }
    }

    pub fn defaults(&self) -> &ProjectionSettings {
        &self.defaults
    }

    /// Run a projection off the async executor.
    pub async fn project(&self, request: ProjectionRequest) -> Result<ProjectionReport, ApiError> {
        let runner = self.runner;
        let report = tokio::task::spawn_blocking(move || runner.run(&request))
            .await
            .map_err(|e| ApiError::Internal(format!("projection task failed: {e}")))??;
        Ok(report)
    }
}
