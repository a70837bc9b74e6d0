use rusqlite::Connection;

use crate::db::DatabaseError;
use crate::models::{AlertCounts, FacilitySummary, StatusCounts};

/// Aggregate counts for the dashboard.
pub fn facility_summary(conn: &Connection) -> Result<FacilitySummary, DatabaseError> {
    let count = |sql: &str| conn.query_row(sql, [], |row| row.get::<_, i64>(0));

    let (donations, donation_total) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(amount), 0.0) FROM donations",
        [],
        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, f64>(1)?)),
    )?;

    Ok(FacilitySummary {
        residents: count("SELECT COUNT(*) FROM residents")?,
        staff: count("SELECT COUNT(*) FROM staff")?,
        donations,
        donation_total,
        health: StatusCounts {
            normal: count("SELECT COUNT(*) FROM health_records WHERE status = 'Normal'")?,
            warning: count("SELECT COUNT(*) FROM health_records WHERE status = 'Warning'")?,
            critical: count("SELECT COUNT(*) FROM health_records WHERE status = 'Critical'")?,
        },
        alerts: AlertCounts {
            warning: count("SELECT COUNT(*) FROM alerts WHERE level = 'Warning'")?,
            critical: count("SELECT COUNT(*) FROM alerts WHERE level = 'Critical'")?,
        },
    })
}
