use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::LooseNumber;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    pub donor_name: String,
    pub amount: f64,
    pub purpose: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationInput {
    #[serde(default)]
    pub donor_name: String,
    pub amount: Option<LooseNumber>,
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub donor_name: String,
    pub amount: f64,
    pub purpose: Option<String>,
}
