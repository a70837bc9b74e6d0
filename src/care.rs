//! Health record intake.
//!
//! Normalizes a raw vitals payload, derives status and risk score,
//! stores the record, then (policy permitting) emits and stores an alert.
//! The alert is only written after the record write succeeded.

use crate::alerting::{self, AlertPolicy};
use crate::db::{AlertStore, DatabaseError, HealthStore};
use crate::models::{
    whole_number, Alert, HealthRecord, HealthRecordInput, HealthStatus, NewHealthRecord,
};
use crate::vitals;

/// Result of a create or update: the stored record and any alert it raised.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeOutcome {
    pub record: HealthRecord,
    pub alert: Option<Alert>,
}

/// Derive the persisted fields for a payload. Status and score are
/// always recomputed here; nothing the client sends can override them.
pub fn assess(input: &HealthRecordInput) -> NewHealthRecord {
    let reading = vitals::normalize(&input.vitals);

    // The raw string is only kept when the reading was taken from it.
    let blood_pressure = input
        .vitals
        .blood_pressure
        .as_ref()
        .map(|bp| bp.trim().to_string())
        .filter(|bp| bp.contains('/'))
        .or_else(|| reading.blood_pressure_label());

    NewHealthRecord {
        resident_name: input.resident_name.trim().to_string(),
        age: whole_number(input.age.as_ref()),
        gender: input.gender.clone(),
        heart_rate: reading.heart_rate,
        blood_pressure,
        temperature: reading.temperature,
        oxygen_level: reading.oxygen_level,
        status: reading.status(),
        risk_score: reading.risk_score(),
    }
}

/// Health record writes bound to a store and an alert policy.
pub struct HealthIntake<'a, S: ?Sized> {
    store: &'a S,
    policy: AlertPolicy,
}

impl<'a, S> HealthIntake<'a, S>
where
    S: HealthStore + AlertStore + ?Sized,
{
    pub fn new(store: &'a S, policy: AlertPolicy) -> Self {
        Self { store, policy }
    }

    pub fn create(&self, input: &HealthRecordInput) -> Result<IntakeOutcome, DatabaseError> {
        let assessed = assess(input);
        let record = self.store.create_health_record(&assessed)?;
        let alert = self.raise_alert(&record, None)?;
        Ok(IntakeOutcome { record, alert })
    }

    pub fn update(
        &self,
        id: i64,
        input: &HealthRecordInput,
    ) -> Result<IntakeOutcome, DatabaseError> {
        let previous = self
            .store
            .get_health_record(id)?
            .ok_or_else(|| DatabaseError::not_found("health_record", id))?;

        let assessed = assess(input);
        let record = self.store.update_health_record(id, &assessed)?;
        let alert = self.raise_alert(&record, Some(previous.status))?;
        Ok(IntakeOutcome { record, alert })
    }

    fn raise_alert(
        &self,
        record: &HealthRecord,
        previous: Option<HealthStatus>,
    ) -> Result<Option<Alert>, DatabaseError> {
        if !self.policy.should_alert(previous, record.status) {
            return Ok(None);
        }
        let Some(new_alert) = alerting::emit(record, record.status) else {
            return Ok(None);
        };

        let alert = self.store.create_alert(&new_alert).map_err(|e| {
            tracing::error!(record_id = record.id, error = %e, "Alert write failed after record write");
            e
        })?;
        tracing::info!(
            record_id = record.id,
            alert_id = alert.id,
            level = %alert.level,
            "Health alert raised"
        );
        Ok(Some(alert))
    }
}
