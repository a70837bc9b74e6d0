use crate::models::{LooseNumber, RawVitals};

use super::VitalsReading;

/// Coerce a raw vitals payload into a `VitalsReading`.
///
/// Never fails. Missing, blank, non-numeric or negative fields become
/// `None`. A combined `bloodPressure` string is split on its first `/`;
/// without a `/` both pressures fall back to the separate
/// `systolicBP`/`diastolicBP` fields, if any.
pub fn normalize(raw: &RawVitals) -> VitalsReading {
    let (systolic_bp, diastolic_bp) = match raw.blood_pressure.as_deref().and_then(split_pressure) {
        Some(pair) => pair,
        None => (
            reading(raw.systolic_bp.as_ref()),
            reading(raw.diastolic_bp.as_ref()),
        ),
    };

    VitalsReading {
        heart_rate: reading(raw.heart_rate.as_ref()),
        temperature: reading(raw.temperature.as_ref()),
        systolic_bp,
        diastolic_bp,
        oxygen_level: reading(raw.oxygen_level.as_ref()),
    }
}

fn reading(field: Option<&LooseNumber>) -> Option<f64> {
    field.and_then(LooseNumber::value).filter(|v| *v >= 0.0)
}

fn text_reading(s: &str) -> Option<f64> {
    reading(Some(&LooseNumber::Text(s.to_string())))
}

/// Split "120/80". `None` when the string has no separator.
fn split_pressure(bp: &str) -> Option<(Option<f64>, Option<f64>)> {
    let (sys, dia) = bp.split_once('/')?;
    Some((text_reading(sys), text_reading(dia)))
}
