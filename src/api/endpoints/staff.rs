//! Staff endpoints. Creating a staff member issues their login email
//! and password; updates never touch those credentials.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::{require_text, ApiError};
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::db::StaffStore;
use crate::models::{Staff, StaffInput, StaffProfile};
use crate::staffing;

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Staff>>, ApiError> {
    Ok(Json(ctx.store.list_staff()?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Staff>, ApiError> {
    let staff = ctx
        .store
        .get_staff(id)?
        .ok_or_else(|| ApiError::NotFound(format!("staff {id} not found")))?;
    Ok(Json(staff))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<StaffInput>,
) -> Result<Json<Staff>, ApiError> {
    require_text("name", &input.name)?;
    let staff = ctx.store.create_staff(&staffing::onboard(&input))?;
    tracing::info!(staff_id = staff.id, "Staff member onboarded");
    Ok(Json(staff))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<StaffInput>,
) -> Result<Json<Staff>, ApiError> {
    require_text("name", &input.name)?;
    Ok(Json(ctx.store.update_staff(id, &StaffProfile::from(&input))?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Staff>, ApiError> {
    Ok(Json(ctx.store.delete_staff(id)?))
}
