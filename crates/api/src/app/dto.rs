use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use careernav_careers::{CareerGuidance, CareerId, CareerScores, CareerSelection, ComparisonMatrix, PivotEdge};
use careernav_projection::{CompoundingMode, ProjectionRequest, ProjectionSettings};

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /projections`. Omitted knobs fall back to the configured defaults.
#[derive(Debug, Deserialize)]
pub struct ProjectionRequestBody {
    #[serde(default)]
    pub careers: CareerSelection,
    pub simulation_count: Option<usize>,
    pub year_count: Option<u32>,
    pub compounding: Option<CompoundingMode>,
    pub seed: Option<u64>,
}

impl ProjectionRequestBody {
    pub fn into_request(self, defaults: &ProjectionSettings) -> ProjectionRequest {
        let mut settings = defaults.clone();
        if let Some(n) = self.simulation_count {
            settings.simulation_count = n;
        }
        if let Some(n) = self.year_count {
            settings.year_count = n;
        }
        if let Some(mode) = self.compounding {
            settings.growth.compounding = mode;
        }

        ProjectionRequest {
            careers: self.careers,
            settings,
            seed: self.seed,
        }
    }
}

/// Body of `POST /scores`.
#[derive(Debug, Deserialize)]
pub struct ScoresRequestBody {
    #[serde(default)]
    pub careers: CareerSelection,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub scores: Vec<CareerScores>,
    pub comparison: ComparisonMatrix,
    pub pivots: Vec<PivotEdge>,
}

#[derive(Debug, Serialize)]
pub struct CareerCatalogEntry {
    pub id: CareerId,
    pub label: &'static str,
    pub pivots: &'static [CareerId],
    pub next_steps: &'static [&'static str],
}

impl From<&'static CareerGuidance> for CareerCatalogEntry {
    fn from(g: &'static CareerGuidance) -> Self {
        Self {
            id: g.career,
            label: g.career.label(),
            pivots: g.pivots,
            next_steps: g.next_steps,
        }
    }
}

/// Malformed or out-of-range JSON bodies are validation errors, not 422s.
pub fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_knobs_use_defaults() {
        let body: ProjectionRequestBody = serde_json::from_str(r#"{"careers": []}"#).unwrap();
        let defaults = ProjectionSettings::default().with_simulation_count(250);
        let req = body.into_request(&defaults);
        assert_eq!(req.settings, defaults);
        assert_eq!(req.seed, None);
    }

    #[test]
    fn explicit_knobs_override_defaults() {
        let body: ProjectionRequestBody = serde_json::from_str(
            r#"{"careers": [], "simulation_count": 10, "year_count": 3, "compounding": "per_year", "seed": 8}"#,
        )
        .unwrap();
        let req = body.into_request(&ProjectionSettings::default());
        assert_eq!(req.settings.simulation_count, 10);
        assert_eq!(req.settings.year_count, 3);
        assert_eq!(req.settings.growth.compounding, CompoundingMode::PerYear);
        assert_eq!(req.seed, Some(8));
    }
}
