use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::HealthStatus;
use super::LooseNumber;

/// A stored vitals check-in for a resident.
///
/// `status` and `risk_score` are always derived from the stored vitals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub id: i64,
    pub resident_name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub heart_rate: Option<f64>,
    pub blood_pressure: Option<String>,
    pub temperature: Option<f64>,
    pub oxygen_level: Option<f64>,
    pub status: HealthStatus,
    pub risk_score: u8,
    pub created_at: NaiveDateTime,
}

/// Vitals as they arrive over the wire: numbers, numeric strings,
/// blanks or nothing at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVitals {
    pub heart_rate: Option<LooseNumber>,
    pub temperature: Option<LooseNumber>,
    /// Combined "systolic/diastolic" reading.
    pub blood_pressure: Option<String>,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<LooseNumber>,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: Option<LooseNumber>,
    pub oxygen_level: Option<LooseNumber>,
}

/// Request body for creating or replacing a health record.
///
/// Any `status` or `riskScore` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordInput {
    #[serde(default)]
    pub resident_name: String,
    pub age: Option<LooseNumber>,
    pub gender: Option<String>,
    #[serde(flatten)]
    pub vitals: RawVitals,
}

/// Assessed health record fields ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHealthRecord {
    pub resident_name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub heart_rate: Option<f64>,
    pub blood_pressure: Option<String>,
    pub temperature: Option<f64>,
    pub oxygen_level: Option<f64>,
    pub status: HealthStatus,
    pub risk_score: u8,
}
