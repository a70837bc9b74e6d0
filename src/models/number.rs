use serde::{Deserialize, Serialize};

/// A numeric request field that may arrive as a JSON number or as a
/// numeric string (form inputs post strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Finite numeric value, or `None` for blank and non-numeric text.
    pub fn value(&self) -> Option<f64> {
        let v = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for LooseNumber {
    fn from(v: f64) -> Self {
        LooseNumber::Number(v)
    }
}

impl From<&str> for LooseNumber {
    fn from(s: &str) -> Self {
        LooseNumber::Text(s.to_string())
    }
}

/// Whole non-negative value of an optional loose number (ages, counts).
pub fn whole_number(field: Option<&LooseNumber>) -> Option<u32> {
    field
        .and_then(LooseNumber::value)
        .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.trunc() as u32)
}
