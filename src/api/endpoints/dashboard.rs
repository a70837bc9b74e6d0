use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::SummaryStore;
use crate::models::FacilitySummary;

/// `GET /dashboard`: headline counts for the home screen.
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<FacilitySummary>, ApiError> {
    Ok(Json(ctx.store.facility_summary()?))
}
