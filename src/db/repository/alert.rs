use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Alert, AlertLevel, NewAlert};

use super::{enum_column, now_timestamp, parse_timestamp};

const ALERT_COLUMNS: &str = "id, title, description, level, created_at";

/// Insert an alert. Alerts have no update or delete path.
pub fn insert_alert(conn: &Connection, a: &NewAlert) -> Result<Alert, DatabaseError> {
    conn.execute(
        "INSERT INTO alerts (title, description, level, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![a.title, a.description, a.level.as_str(), now_timestamp()],
    )?;
    let id = conn.last_insert_rowid();
    get_alert(conn, id)?.ok_or_else(|| DatabaseError::not_found("alert", id))
}

pub fn get_alert(conn: &Connection, id: i64) -> Result<Option<Alert>, DatabaseError> {
    let sql = format!("SELECT {ALERT_COLUMNS} FROM alerts WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], row_to_alert).optional()?)
}

/// All alerts, newest first.
pub fn list_alerts(conn: &Connection) -> Result<Vec<Alert>, DatabaseError> {
    let sql = format!("SELECT {ALERT_COLUMNS} FROM alerts ORDER BY created_at DESC, id DESC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_alert)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

fn row_to_alert(row: &rusqlite::Row) -> Result<Alert, rusqlite::Error> {
    let level_str: String = row.get(3)?;
    let created_str: String = row.get(4)?;
    Ok(Alert {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        level: enum_column::<AlertLevel>(3, &level_str)?,
        created_at: parse_timestamp(&created_str),
    })
}
