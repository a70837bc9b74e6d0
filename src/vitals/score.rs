/// Weighted 0–100 risk score from four vitals.
///
/// Any zero input short-circuits to 0, which also keeps the
/// blood-pressure and oxygen ratios away from a zero divisor.
pub fn risk_score(heart_rate: f64, temperature: f64, systolic_bp: f64, oxygen_level: f64) -> u8 {
    if heart_rate == 0.0 || temperature == 0.0 || systolic_bp == 0.0 || oxygen_level == 0.0 {
        return 0;
    }

    let raw = heart_rate * 0.3
        + temperature * 0.4
        + (120.0 / systolic_bp) * 15.0
        + (98.0 / oxygen_level) * 10.0;

    // Round half up, then cap.
    let rounded = (raw + 0.5).floor();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        rounded.min(100.0) as u8
    }
}
