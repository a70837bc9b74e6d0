use crate::models::HealthStatus;

use super::VitalsReading;

/// Upper/lower limits for one severity tier. A reading is in the tier
/// when any vital strictly crosses its limit.
struct Tier {
    heart_rate_above: f64,
    systolic_above: f64,
    diastolic_above: f64,
    temperature_above: f64,
    oxygen_below: f64,
}

const CRITICAL: Tier = Tier {
    heart_rate_above: 140.0,
    systolic_above: 160.0,
    diastolic_above: 100.0,
    temperature_above: 103.0,
    oxygen_below: 88.0,
};

const WARNING: Tier = Tier {
    heart_rate_above: 110.0,
    systolic_above: 140.0,
    diastolic_above: 90.0,
    temperature_above: 100.5,
    oxygen_below: 94.0,
};

impl Tier {
    fn matches(&self, r: &VitalsReading) -> bool {
        above(r.heart_rate, self.heart_rate_above)
            || above(r.systolic_bp, self.systolic_above)
            || above(r.diastolic_bp, self.diastolic_above)
            || above(r.temperature, self.temperature_above)
            || below(r.oxygen_level, self.oxygen_below)
    }
}

// Unavailable readings match nothing.
fn above(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v > limit)
}

fn below(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v < limit)
}

/// Classify a reading. Critical rules are checked before Warning.
pub fn classify(reading: &VitalsReading) -> HealthStatus {
    if CRITICAL.matches(reading) {
        HealthStatus::Critical
    } else if WARNING.matches(reading) {
        HealthStatus::Warning
    } else {
        HealthStatus::Normal
    }
}
