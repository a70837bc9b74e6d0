use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{NewStaff, Staff, StaffProfile};

use super::{now_timestamp, parse_timestamp};

const STAFF_COLUMNS: &str = "id, name, role, contact, shift, email, password, created_at";

pub fn insert_staff(conn: &Connection, s: &NewStaff) -> Result<Staff, DatabaseError> {
    conn.execute(
        "INSERT INTO staff (name, role, contact, shift, email, password, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            s.profile.name,
            s.profile.role,
            s.profile.contact,
            s.profile.shift,
            s.credentials.email,
            s.credentials.password,
            now_timestamp(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    get_staff(conn, id)?.ok_or_else(|| DatabaseError::not_found("staff", id))
}

pub fn get_staff(conn: &Connection, id: i64) -> Result<Option<Staff>, DatabaseError> {
    let sql = format!("SELECT {STAFF_COLUMNS} FROM staff WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], row_to_staff).optional()?)
}

pub fn list_staff(conn: &Connection) -> Result<Vec<Staff>, DatabaseError> {
    let sql = format!("SELECT {STAFF_COLUMNS} FROM staff ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_staff)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Update profile fields. Issued credentials are left untouched.
pub fn update_staff(
    conn: &Connection,
    id: i64,
    p: &StaffProfile,
) -> Result<Staff, DatabaseError> {
    let affected = conn.execute(
        "UPDATE staff SET name = ?1, role = ?2, contact = ?3, shift = ?4 WHERE id = ?5",
        params![p.name, p.role, p.contact, p.shift, id],
    )?;
    if affected == 0 {
        return Err(DatabaseError::not_found("staff", id));
    }
    get_staff(conn, id)?.ok_or_else(|| DatabaseError::not_found("staff", id))
}

pub fn delete_staff(conn: &Connection, id: i64) -> Result<Staff, DatabaseError> {
    let existing = get_staff(conn, id)?.ok_or_else(|| DatabaseError::not_found("staff", id))?;
    conn.execute("DELETE FROM staff WHERE id = ?1", params![id])?;
    Ok(existing)
}

fn row_to_staff(row: &rusqlite::Row) -> Result<Staff, rusqlite::Error> {
    let created_str: String = row.get(7)?;
    Ok(Staff {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        contact: row.get(3)?,
        shift: row.get(4)?,
        email: row.get(5)?,
        password: row.get(6)?,
        created_at: parse_timestamp(&created_str),
    })
}
