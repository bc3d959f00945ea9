use axum::{Json, extract::rejection::JsonRejection};

use careernav_careers::{career_scores, pairwise_comparison, pivot_edges};

use crate::app::dto::{self, ScoresRequestBody, ScoresResponse};
use crate::app::errors::ApiError;

/// Scores and comparison without running a simulation.
pub async fn compute_scores(
    body: Result<Json<ScoresRequestBody>, JsonRejection>,
) -> Result<Json<ScoresResponse>, ApiError> {
    let Json(body) = body.map_err(dto::map_json_rejection)?;
    let careers = &body.careers;

    Ok(Json(ScoresResponse {
        scores: career_scores(careers),
        comparison: pairwise_comparison(careers),
        pivots: pivot_edges(careers),
    }))
}
