use axum::{
    Router,
    routing::{get, post},
};

pub mod careers;
pub mod projections;
pub mod scores;
pub mod system;

/// Router for all form-facing endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/careers", get(careers::list_careers))
        .route("/careers/:id", get(careers::get_career))
        .route("/projections", post(projections::create_projection))
        .route("/scores", post(scores::compute_scores))
}
