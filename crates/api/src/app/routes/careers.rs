use axum::{Json, extract::Path};

use careernav_careers::{CareerId, guidance};

use crate::app::dto::CareerCatalogEntry;
use crate::app::errors::ApiError;

pub async fn list_careers() -> Json<Vec<CareerCatalogEntry>> {
    Json(
        CareerId::ALL
            .into_iter()
            .map(|id| CareerCatalogEntry::from(guidance(id)))
            .collect(),
    )
}

/// `id` may be a slug (`board-membership`) or a label (`Board Membership`).
pub async fn get_career(Path(id): Path<String>) -> Result<Json<CareerCatalogEntry>, ApiError> {
    let career: CareerId = id.parse()?;
    Ok(Json(CareerCatalogEntry::from(guidance(career))))
}
