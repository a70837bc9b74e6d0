use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::{require_text, ApiError};
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::db::DonationStore;
use crate::models::{Donation, DonationInput, NewDonation};

fn validate(input: &DonationInput) -> Result<NewDonation, ApiError> {
    require_text("donorName", &input.donor_name)?;
    let amount = input
        .amount
        .as_ref()
        .and_then(|a| a.value())
        .filter(|a| *a >= 0.0)
        .ok_or_else(|| ApiError::BadRequest("amount must be a non-negative number".into()))?;

    Ok(NewDonation {
        donor_name: input.donor_name.trim().to_string(),
        amount,
        purpose: input.purpose.clone(),
    })
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Donation>>, ApiError> {
    Ok(Json(ctx.store.list_donations()?))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Donation>, ApiError> {
    let donation = ctx
        .store
        .get_donation(id)?
        .ok_or_else(|| ApiError::NotFound(format!("donation {id} not found")))?;
    Ok(Json(donation))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(input): ApiJson<DonationInput>,
) -> Result<Json<Donation>, ApiError> {
    let donation = validate(&input)?;
    Ok(Json(ctx.store.create_donation(&donation)?))
}

pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
    ApiJson(input): ApiJson<DonationInput>,
) -> Result<Json<Donation>, ApiError> {
    let donation = validate(&input)?;
    Ok(Json(ctx.store.update_donation(id, &donation)?))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    Path(id): Path<i64>,
) -> Result<Json<Donation>, ApiError> {
    Ok(Json(ctx.store.delete_donation(id)?))
}
