//! Alert endpoints. Alerts are read-only over the API; they are only
//! ever created by health record writes.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db::AlertStore;
use crate::models::Alert;

/// `GET /alerts`: newest first.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Alert>>, ApiError> {
    Ok(Json(ctx.store.list_alerts()?))
}

/// `GET /alerts/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Alert>, ApiError> {
    let alert = ctx
        .store
        .get_alert(id)?
        .ok_or_else(|| ApiError::NotFound(format!("alert {id} not found")))?;
    Ok(Json(alert))
}
