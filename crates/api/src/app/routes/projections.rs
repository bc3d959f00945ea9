use std::sync::Arc;

use axum::{Extension, Json, extract::rejection::JsonRejection};

use careernav_projection::ProjectionReport;

use crate::app::dto::{self, ProjectionRequestBody};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn create_projection(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProjectionRequestBody>, JsonRejection>,
) -> Result<Json<ProjectionReport>, ApiError> {
    let Json(body) = body.map_err(dto::map_json_rejection)?;
    let request = body.into_request(services.defaults());

    let report = services.project(request).await?;
    Ok(Json(report))
}
