//! Alert emission for non-Normal health records.
//!
//! `emit` only builds the alert. Persisting it is the caller's job, and
//! must happen after the health record itself has been stored.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{AlertLevel, HealthRecord, HealthStatus, NewAlert};

pub const CRITICAL_TITLE: &str = "CRITICAL HEALTH ALERT";
pub const WARNING_TITLE: &str = "Health Warning";

/// Build the alert for a freshly classified record. `None` for Normal.
///
/// No deduplication: the same record and status always yield a new alert.
pub fn emit(record: &HealthRecord, status: HealthStatus) -> Option<NewAlert> {
    let level = status.alert_level()?;
    let title = match level {
        AlertLevel::Critical => CRITICAL_TITLE,
        AlertLevel::Warning => WARNING_TITLE,
    };

    Some(NewAlert {
        title: title.to_string(),
        description: format!("{}'s health status is {}", record.resident_name, status),
        level,
    })
}

/// When a health record write should raise an alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPolicy {
    /// Every write whose status is Warning or Critical, including repeats.
    #[default]
    EveryNonNormal,
    /// Only writes that move the record to a strictly worse, non-Normal status.
    OnEscalation,
}

impl AlertPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertPolicy::EveryNonNormal => "every",
            AlertPolicy::OnEscalation => "escalation",
        }
    }

    /// `previous` is the status before this write; `None` for a new record.
    pub fn should_alert(self, previous: Option<HealthStatus>, current: HealthStatus) -> bool {
        if current == HealthStatus::Normal {
            return false;
        }
        match self {
            AlertPolicy::EveryNonNormal => true,
            AlertPolicy::OnEscalation => {
                let before = previous.unwrap_or(HealthStatus::Normal);
                current.severity() > before.severity()
            }
        }
    }
}

impl FromStr for AlertPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "every" | "every_non_normal" => Ok(AlertPolicy::EveryNonNormal),
            "escalation" | "on_escalation" => Ok(AlertPolicy::OnEscalation),
            other => Err(format!("unknown alert policy: {other}")),
        }
    }
}
