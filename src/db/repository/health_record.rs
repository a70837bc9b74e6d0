use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{HealthRecord, HealthStatus, NewHealthRecord};

use super::{enum_column, now_timestamp, parse_timestamp};

const HEALTH_COLUMNS: &str = "id, resident_name, age, gender, heart_rate, blood_pressure, \
     temperature, oxygen_level, status, risk_score, created_at";

pub fn insert_health_record(
    conn: &Connection,
    r: &NewHealthRecord,
) -> Result<HealthRecord, DatabaseError> {
    conn.execute(
        "INSERT INTO health_records
         (resident_name, age, gender, heart_rate, blood_pressure, temperature,
          oxygen_level, status, risk_score, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            r.resident_name,
            r.age,
            r.gender,
            r.heart_rate,
            r.blood_pressure,
            r.temperature,
            r.oxygen_level,
            r.status.as_str(),
            r.risk_score,
            now_timestamp(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_health_record(conn, id)?.ok_or_else(|| DatabaseError::not_found("health_record", id))
}

pub fn get_health_record(
    conn: &Connection,
    id: i64,
) -> Result<Option<HealthRecord>, DatabaseError> {
    let sql = format!("SELECT {HEALTH_COLUMNS} FROM health_records WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], row_to_health_record).optional()?)
}

/// All health records, newest first.
pub fn list_health_records(conn: &Connection) -> Result<Vec<HealthRecord>, DatabaseError> {
    let sql = format!(
        "SELECT {HEALTH_COLUMNS} FROM health_records ORDER BY created_at DESC, id DESC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_health_record)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Replace every field of a record. `created_at` is preserved.
pub fn update_health_record(
    conn: &Connection,
    id: i64,
    r: &NewHealthRecord,
) -> Result<HealthRecord, DatabaseError> {
    let affected = conn.execute(
        "UPDATE health_records SET resident_name = ?1, age = ?2, gender = ?3,
         heart_rate = ?4, blood_pressure = ?5, temperature = ?6, oxygen_level = ?7,
         status = ?8, risk_score = ?9
         WHERE id = ?10",
        params![
            r.resident_name,
            r.age,
            r.gender,
            r.heart_rate,
            r.blood_pressure,
            r.temperature,
            r.oxygen_level,
            r.status.as_str(),
            r.risk_score,
            id,
        ],
    )?;
    if affected == 0 {
        return Err(DatabaseError::not_found("health_record", id));
    }
    get_health_record(conn, id)?.ok_or_else(|| DatabaseError::not_found("health_record", id))
}

pub fn delete_health_record(conn: &Connection, id: i64) -> Result<HealthRecord, DatabaseError> {
    let existing = get_health_record(conn, id)?
        .ok_or_else(|| DatabaseError::not_found("health_record", id))?;
    conn.execute("DELETE FROM health_records WHERE id = ?1", params![id])?;
    Ok(existing)
}

fn row_to_health_record(row: &rusqlite::Row) -> Result<HealthRecord, rusqlite::Error> {
    let status_str: String = row.get(8)?;
    let created_str: String = row.get(10)?;

    Ok(HealthRecord {
        id: row.get(0)?,
        resident_name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        heart_rate: row.get(4)?,
        blood_pressure: row.get(5)?,
        temperature: row.get(6)?,
        oxygen_level: row.get(7)?,
        status: enum_column::<HealthStatus>(8, &status_str)?,
        risk_score: row.get(9)?,
        created_at: parse_timestamp(&created_str),
    })
}
