use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{NewResident, Resident};

use super::{now_timestamp, parse_timestamp};

const RESIDENT_COLUMNS: &str = "id, name, age, gender, health_info, room, created_at";

pub fn insert_resident(conn: &Connection, r: &NewResident) -> Result<Resident, DatabaseError> {
    conn.execute(
        "INSERT INTO residents (name, age, gender, health_info, room, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![r.name, r.age, r.gender, r.health_info, r.room, now_timestamp()],
    )?;
    let id = conn.last_insert_rowid();
    get_resident(conn, id)?.ok_or_else(|| DatabaseError::not_found("resident", id))
}

pub fn get_resident(conn: &Connection, id: i64) -> Result<Option<Resident>, DatabaseError> {
    let sql = format!("SELECT {RESIDENT_COLUMNS} FROM residents WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], row_to_resident).optional()?)
}

pub fn list_residents(conn: &Connection) -> Result<Vec<Resident>, DatabaseError> {
    let sql = format!("SELECT {RESIDENT_COLUMNS} FROM residents ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_resident)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn update_resident(
    conn: &Connection,
    id: i64,
    r: &NewResident,
) -> Result<Resident, DatabaseError> {
    let affected = conn.execute(
        "UPDATE residents SET name = ?1, age = ?2, gender = ?3, health_info = ?4, room = ?5
         WHERE id = ?6",
        params![r.name, r.age, r.gender, r.health_info, r.room, id],
    )?;
    if affected == 0 {
        return Err(DatabaseError::not_found("resident", id));
    }
    get_resident(conn, id)?.ok_or_else(|| DatabaseError::not_found("resident", id))
}

/// Delete a resident, returning the removed row.
pub fn delete_resident(conn: &Connection, id: i64) -> Result<Resident, DatabaseError> {
    let existing = get_resident(conn, id)?.ok_or_else(|| DatabaseError::not_found("resident", id))?;
    conn.execute("DELETE FROM residents WHERE id = ?1", params![id])?;
    Ok(existing)
}

fn row_to_resident(row: &rusqlite::Row) -> Result<Resident, rusqlite::Error> {
    let created_str: String = row.get(6)?;
    Ok(Resident {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        health_info: row.get(4)?,
        room: row.get(5)?,
        created_at: parse_timestamp(&created_str),
    })
}
