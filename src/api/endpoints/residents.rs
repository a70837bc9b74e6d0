use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::{require_text, ApiError};
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::db::ResidentStore;
use crate::models::{NewResident, Resident, ResidentInput};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Resident>>, ApiError> {
    Ok(Json(ctx.store.list_residents()?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Resident>, ApiError> {
    let resident = ctx
        .store
        .get_resident(id)?
        .ok_or_else(|| ApiError::NotFound(format!("resident {id} not found")))?;
    Ok(Json(resident))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<ResidentInput>,
) -> Result<Json<Resident>, ApiError> {
    require_text("name", &input.name)?;
    Ok(Json(ctx.store.create_resident(&NewResident::from(&input))?))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<ResidentInput>,
) -> Result<Json<Resident>, ApiError> {
    require_text("name", &input.name)?;
    Ok(Json(ctx.store.update_resident(id, &NewResident::from(&input))?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Resident>, ApiError> {
    Ok(Json(ctx.store.delete_resident(id)?))
}
