//! Liveness endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config;

/// `GET /`: plain-text banner.
pub async fn banner() -> String {
    format!(
        "{} backend running v{} (risk score + status classification active)",
        config::APP_NAME,
        config::APP_VERSION
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub alert_policy: &'static str,
}

/// `GET /status`: connection check for the dashboard.
pub async fn check(State(ctx): State<ApiContext>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: config::APP_VERSION,
        alert_policy: ctx.alert_policy.as_str(),
    })
}
