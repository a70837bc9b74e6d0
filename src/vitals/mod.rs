//! Vitals assessment: normalization, risk scoring and status classification.
//!
//! Everything in this module is pure. Callers normalize a raw payload
//! once, then feed the same `VitalsReading` to `risk_score` and
//! `classify`.

pub mod classify;
pub mod normalize;
pub mod score;

pub use classify::classify;
pub use normalize::normalize;
pub use score::risk_score;

use crate::models::HealthStatus;

/// Value substituted for a reading that is missing or unparseable.
/// Any unavailable input drives the risk score to 0.
pub const UNAVAILABLE: f64 = 0.0;

/// One set of vital signs. `None` marks a reading that was not supplied
/// or could not be read as a non-negative number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VitalsReading {
    /// Beats per minute.
    pub heart_rate: Option<f64>,
    /// Degrees Fahrenheit.
    pub temperature: Option<f64>,
    /// mmHg.
    pub systolic_bp: Option<f64>,
    /// mmHg.
    pub diastolic_bp: Option<f64>,
    /// SpO2 percent.
    pub oxygen_level: Option<f64>,
}

impl VitalsReading {
    /// Reading with every vital present.
    pub fn measured(
        heart_rate: f64,
        temperature: f64,
        systolic_bp: f64,
        diastolic_bp: f64,
        oxygen_level: f64,
    ) -> Self {
        Self {
            heart_rate: Some(heart_rate),
            temperature: Some(temperature),
            systolic_bp: Some(systolic_bp),
            diastolic_bp: Some(diastolic_bp),
            oxygen_level: Some(oxygen_level),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Risk score for this reading, with unavailable vitals as `UNAVAILABLE`.
    pub fn risk_score(&self) -> u8 {
        risk_score(
            self.heart_rate.unwrap_or(UNAVAILABLE),
            self.temperature.unwrap_or(UNAVAILABLE),
            self.systolic_bp.unwrap_or(UNAVAILABLE),
            self.oxygen_level.unwrap_or(UNAVAILABLE),
        )
    }

    pub fn status(&self) -> HealthStatus {
        classify(self)
    }

    /// "systolic/diastolic" when both pressures are known.
    pub fn blood_pressure_label(&self) -> Option<String> {
        match (self.systolic_bp, self.diastolic_bp) {
            (Some(sys), Some(dia)) => Some(format!("{sys}/{dia}")),
            _ => None,
        }
    }
}
