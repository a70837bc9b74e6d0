//! Bulk health record import from CSV.
//!
//! Every row goes through `HealthIntake::create`, so status and risk
//! score are recomputed and alerts raised exactly as for a single
//! `POST /health`. `status` and `riskScore` columns, if present, are
//! ignored.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::care::HealthIntake;
use crate::db::{AlertStore, DatabaseError, HealthStore};
use crate::models::{HealthRecordInput, LooseNumber, RawVitals};

/// One CSV row. Headers use the same camelCase names as the JSON API;
/// unknown columns are skipped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvHealthRow {
    resident_name: Option<String>,
    age: Option<String>,
    gender: Option<String>,
    heart_rate: Option<String>,
    blood_pressure: Option<String>,
    #[serde(rename = "systolicBP")]
    systolic_bp: Option<String>,
    #[serde(rename = "diastolicBP")]
    diastolic_bp: Option<String>,
    temperature: Option<String>,
    oxygen_level: Option<String>,
}

impl From<CsvHealthRow> for HealthRecordInput {
    fn from(row: CsvHealthRow) -> Self {
        let number = |field: Option<String>| field.map(LooseNumber::Text);
        HealthRecordInput {
            resident_name: row.resident_name.unwrap_or_default(),
            age: number(row.age),
            gender: row.gender,
            vitals: RawVitals {
                heart_rate: number(row.heart_rate),
                temperature: number(row.temperature),
                blood_pressure: row.blood_pressure,
                systolic_bp: number(row.systolic_bp),
                diastolic_bp: number(row.diastolic_bp),
                oxygen_level: number(row.oxygen_level),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported: usize,
    pub alerts: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Import every row of `reader`. Unreadable rows and rows without a
/// resident name are skipped and reported. A store failure stops the
/// import; rows before it stay imported.
pub fn import_csv<S, R>(
    intake: &HealthIntake<'_, S>,
    reader: R,
) -> Result<ImportReport, DatabaseError>
where
    S: HealthStore + AlertStore + ?Sized,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut report = ImportReport::default();

    for (index, result) in csv_reader.deserialize::<CsvHealthRow>().enumerate() {
        let row = index + 1;
        let input = match result {
            Ok(parsed) => HealthRecordInput::from(parsed),
            Err(e) => {
                report.skipped.push(SkippedRow {
                    row,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if input.resident_name.trim().is_empty() {
            report.skipped.push(SkippedRow {
                row,
                reason: "residentName is required".into(),
            });
            continue;
        }

        let outcome = intake.create(&input)?;
        report.imported += 1;
        if outcome.alert.is_some() {
            report.alerts += 1;
        }
    }

    tracing::info!(
        imported = report.imported,
        alerts = report.alerts,
        skipped = report.skipped.len(),
        "Health record import finished"
    );
    Ok(report)
}
