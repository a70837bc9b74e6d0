use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::{Donation, NewDonation};

use super::{now_timestamp, parse_timestamp};

const DONATION_COLUMNS: &str = "id, donor_name, amount, purpose, created_at";

pub fn insert_donation(conn: &Connection, d: &NewDonation) -> Result<Donation, DatabaseError> {
    conn.execute(
        "INSERT INTO donations (donor_name, amount, purpose, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![d.donor_name, d.amount, d.purpose, now_timestamp()],
    )?;
    let id = conn.last_insert_rowid();
    get_donation(conn, id)?.ok_or_else(|| DatabaseError::not_found("donation", id))
}

pub fn get_donation(conn: &Connection, id: i64) -> Result<Option<Donation>, DatabaseError> {
    let sql = format!("SELECT {DONATION_COLUMNS} FROM donations WHERE id = ?1");
    Ok(conn.query_row(&sql, params![id], row_to_donation).optional()?)
}

pub fn list_donations(conn: &Connection) -> Result<Vec<Donation>, DatabaseError> {
    let sql = format!("SELECT {DONATION_COLUMNS} FROM donations ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], row_to_donation)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

pub fn update_donation(
    conn: &Connection,
    id: i64,
    d: &NewDonation,
) -> Result<Donation, DatabaseError> {
    let affected = conn.execute(
        "UPDATE donations SET donor_name = ?1, amount = ?2, purpose = ?3 WHERE id = ?4",
        params![d.donor_name, d.amount, d.purpose, id],
    )?;
    if affected == 0 {
        return Err(DatabaseError::not_found("donation", id));
    }
    get_donation(conn, id)?.ok_or_else(|| DatabaseError::not_found("donation", id))
}

pub fn delete_donation(conn: &Connection, id: i64) -> Result<Donation, DatabaseError> {
    let existing = get_donation(conn, id)?.ok_or_else(|| DatabaseError::not_found("donation", id))?;
    conn.execute("DELETE FROM donations WHERE id = ?1", params![id])?;
    Ok(existing)
}

fn row_to_donation(row: &rusqlite::Row) -> Result<Donation, rusqlite::Error> {
    let created_str: String = row.get(4)?;
    Ok(Donation {
        id: row.get(0)?,
        donor_name: row.get(1)?,
        amount: row.get(2)?,
        purpose: row.get(3)?,
        created_at: parse_timestamp(&created_str),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn make_donation(amount: f64) -> NewDonation {
        NewDonation {
            donor_name: "Rotary Club".into(),
            amount,
            purpose: Some("Garden".into()),
        }
    }

    #[test]
    fn insert_and_retrieve() {
        let conn = open_memory_database().unwrap();
        let created = insert_donation(&conn, &make_donation(250.5)).unwrap();
        let fetched = get_donation(&conn, created.id).unwrap().unwrap();
        assert!((fetched.amount - 250.5).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_amount_violates_check() {
        let conn = open_memory_database().unwrap();
        assert!(insert_donation(&conn, &make_donation(-1.0)).is_err());
    }

    #[test]
    fn update_and_delete() {
        let conn = open_memory_database().unwrap();
        let created = insert_donation(&conn, &make_donation(10.0)).unwrap();

        let updated = update_donation(&conn, created.id, &make_donation(20.0)).unwrap();
        assert!((updated.amount - 20.0).abs() < f64::EPSILON);

        delete_donation(&conn, created.id).unwrap();
        assert!(list_donations(&conn).unwrap().is_empty());
    }
}
