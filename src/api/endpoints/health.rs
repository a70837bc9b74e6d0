//! Health record endpoints.
//!
//! - `GET /health`: all records, newest first
//! - `GET /health/:id`: one record
//! - `POST /health`: create from a raw vitals payload
//! - `PUT /health/:id`: replace a record
//! - `DELETE /health/:id`: remove a record
//! - `POST /health/import`: bulk create from a CSV body
//!
//! Status and risk score are derived server-side on every write; any
//! alert raised by the write is persisted after the record.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::{require_text, ApiError};
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::db::HealthStore;
use crate::import::{self, ImportReport};
use crate::models::{HealthRecord, HealthRecordInput};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<HealthRecord>>, ApiError> {
    Ok(Json(ctx.store.list_health_records()?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<HealthRecord>, ApiError> {
    let record = ctx
        .store
        .get_health_record(id)?
        .ok_or_else(|| ApiError::NotFound(format!("health_record {id} not found")))?;
    Ok(Json(record))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<HealthRecordInput>,
) -> Result<Json<HealthRecord>, ApiError> {
    require_text("residentName", &input.resident_name)?;
    let outcome = ctx.intake().create(&input)?;
    Ok(Json(outcome.record))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<HealthRecordInput>,
) -> Result<Json<HealthRecord>, ApiError> {
    require_text("residentName", &input.resident_name)?;
    let outcome = ctx.intake().update(id, &input)?;
    Ok(Json(outcome.record))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<HealthRecord>, ApiError> {
    Ok(Json(ctx.store.delete_health_record(id)?))
}

/// CSV upload, one health record per row. Responds with a per-row report.
pub async fn import(
    State(ctx): State<ApiContext>,
    body: String,
) -> Result<Json<ImportReport>, ApiError> {
    let report = import::import_csv(&ctx.intake(), body.as_bytes())?;
    Ok(Json(report))
}
