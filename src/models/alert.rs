use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::enums::AlertLevel;

/// A stored health alert. Alerts are created and read, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub level: AlertLevel,
    pub created_at: NaiveDateTime,
}

/// An alert that has been constructed but not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub title: String,
    pub description: String,
    pub level: AlertLevel,
}
