use serde::Serialize;

/// Headline numbers for the dashboard home screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    pub residents: i64,
    pub staff: i64,
    pub donations: i64,
    pub donation_total: f64,
    pub health: StatusCounts,
    pub alerts: AlertCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub normal: i64,
    pub warning: i64,
    pub critical: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCounts {
    pub warning: i64,
    pub critical: i64,
}
